//! # Core types for checking PCGR input files
//!
//! Data model shared by the reader and checker crates: VCF records, INFO tag
//! declarations, copy-number segments, the two sort domains used when
//! normalizing a VCF, the error type, and small file helpers.
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{CheckError, CheckResult};
