//! # Input readers for PCGR checks
//!
//! Line-oriented readers for the two kinds of text files the checker consumes:
//! VCF files (plain or gzipped), read header first and then record by record,
//! and tab-separated tables with a header row.
pub mod table;
pub mod vcf;

// re-expose readers
pub use table::*;
pub use vcf::*;
