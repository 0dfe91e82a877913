//! # Input checks for the PCGR annotation pipeline
//!
//! Validates a somatic VCF and an optional copy-number segment table before
//! annotation, and writes a sorted, sample-free, bgzipped and indexed copy of
//! the VCF.
//!
//! The checks run in order and stop at the first failure:
//!
//! 1. structural validation by `vcf_validator` ([`structural`])
//! 2. INFO tags colliding with tags produced by PCGR ([`tags`], [`registry`])
//! 3. `chr`-prefixed contigs and multi-allelic records ([`records`])
//! 4. normalization, compression and indexing ([`normalize`], [`compress`])
//! 5. copy-number segment format ([`segments`])
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use pcgr_check::{BgzipTabix, CheckConfig, CheckRequest, Logger, Pipeline, VcfValidatorCommand};
//!
//! let config = CheckConfig::default();
//! let request = CheckRequest {
//!     pcgr_dir: PathBuf::from("/data"),
//!     input_vcf: Some(PathBuf::from("tumor.vcf.gz")),
//!     input_cna_segments: None,
//!     config: config.clone(),
//! };
//! let validator = VcfValidatorCommand::new(&config.tools.vcf_validator, &config.output_dir);
//! let compressor = BgzipTabix::new(&config.tools.bgzip, &config.tools.tabix);
//! let logger = Logger::default();
//!
//! let _outcome = Pipeline::new(&request, &validator, &compressor, &logger).run();
//! ```
pub mod compress;
pub mod config;
pub mod consts;
pub mod logger;
pub mod normalize;
pub mod pipeline;
pub mod records;
pub mod registry;
pub mod segments;
pub mod structural;
pub mod tags;

// re-exports
pub use compress::{BgzipTabix, Compressor};
pub use config::CheckConfig;
pub use logger::Logger;
pub use pipeline::{CheckOutcome, CheckRequest, Pipeline, Stage, exit_code};
pub use registry::TagRegistry;
pub use structural::{StructuralValidator, ValidationVerdict, VcfValidatorCommand, VerdictStatus};
