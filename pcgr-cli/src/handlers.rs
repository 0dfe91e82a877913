use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use pcgr_check::consts::CHECK_INPUT_LOGGER;
use pcgr_check::{
    BgzipTabix, CheckConfig, CheckRequest, Logger, Pipeline, VcfValidatorCommand, exit_code,
};
use pcgr_core::utils::optional_input;

use crate::cli::*;

fn load_config(matches: &ArgMatches) -> Result<CheckConfig> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => CheckConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => CheckConfig::default(),
    };

    if let Some(output_dir) = matches.get_one::<String>(OUTPUT_DIR_ARG) {
        config.output_dir = PathBuf::from(output_dir);
    }

    Ok(config)
}

///
/// Run every input check and return the process exit code.
///
pub fn run_check_input(matches: &ArgMatches) -> Result<i32> {
    let pcgr_dir = matches
        .get_one::<String>(PCGR_DIR_ARG)
        .expect("A PCGR base directory is required.");
    let input_vcf = matches
        .get_one::<String>(INPUT_VCF_ARG)
        .expect("An input VCF (or None) is required.");
    let input_cna = matches
        .get_one::<String>(INPUT_CNA_ARG)
        .expect("An input segment file (or None) is required.");

    let config = load_config(matches)?;

    let validator = VcfValidatorCommand::new(&config.tools.vcf_validator, &config.output_dir);
    let compressor = BgzipTabix::new(&config.tools.bgzip, &config.tools.tabix);
    let logger = Logger::new(CHECK_INPUT_LOGGER);

    let request = CheckRequest {
        pcgr_dir: PathBuf::from(pcgr_dir),
        input_vcf: optional_input(input_vcf),
        input_cna_segments: optional_input(input_cna),
        config,
    };

    let result = Pipeline::new(&request, &validator, &compressor, &logger).run();
    if let Ok(outcome) = &result {
        if let Some(ready_vcf) = &outcome.ready_vcf {
            logger.info(format!("PCGR-ready VCF written to {}", ready_vcf.display()));
        }
    }

    Ok(exit_code(&result))
}
