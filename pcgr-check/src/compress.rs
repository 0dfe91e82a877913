use std::io;
use std::process::Command;

use pcgr_core::utils::OutputPaths;
use pcgr_core::{CheckError, CheckResult};

use crate::logger::Logger;

pub trait Compressor {
    ///
    /// Compress the sorted `ready_vcf` in place and index it, producing
    /// `ready_vcf_gz` and `ready_vcf_index`.
    ///
    fn compress_and_index(&self, paths: &OutputPaths, logger: &Logger) -> CheckResult<()>;
}

///
/// `bgzip -f` followed by `tabix -p vcf`.
///
#[derive(Debug, Clone)]
pub struct BgzipTabix {
    bgzip: String,
    tabix: String,
}

impl BgzipTabix {
    pub fn new(bgzip: impl Into<String>, tabix: impl Into<String>) -> Self {
        BgzipTabix {
            bgzip: bgzip.into(),
            tabix: tabix.into(),
        }
    }
}

fn run_tool(mut cmd: Command, tool: &str, logger: &Logger) -> CheckResult<()> {
    logger.debug(format!("Running {:?}", cmd));

    let status = cmd.status().map_err(|e| {
        CheckError::Io(io::Error::new(
            e.kind(),
            format!("Failed to run {}: {}", tool, e),
        ))
    })?;

    if !status.success() {
        return Err(CheckError::Tool {
            tool: tool.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}

impl Compressor for BgzipTabix {
    fn compress_and_index(&self, paths: &OutputPaths, logger: &Logger) -> CheckResult<()> {
        let mut bgzip = Command::new(&self.bgzip);
        bgzip.arg("-f").arg(&paths.ready_vcf);
        run_tool(bgzip, &self.bgzip, logger)?;

        let mut tabix = Command::new(&self.tabix);
        tabix.args(["-p", "vcf"]).arg(&paths.ready_vcf_gz);
        run_tool(tabix, &self.tabix, logger)?;

        if !paths.ready_vcf_index.is_file() {
            return Err(CheckError::Tool {
                tool: self.tabix.clone(),
                status: format!("no index written at {}", paths.ready_vcf_index.display()),
            });
        }

        logger.info(format!("Compressed and indexed {}", paths.ready_vcf_gz.display()));
        Ok(())
    }
}
