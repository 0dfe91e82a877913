use std::path::{Path, PathBuf};

use pcgr_core::utils::OutputPaths;
use pcgr_core::{CheckError, CheckResult};

use crate::compress::Compressor;
use crate::config::CheckConfig;
use crate::logger::Logger;
use crate::normalize::{NormalizeSummary, normalize_vcf};
use crate::records::check_records;
use crate::registry::{RegistryPaths, TagRegistry};
use crate::segments::check_segment_file;
use crate::structural::{StructuralValidator, VerdictStatus};
use crate::tags::check_info_tags;

/// Stages of a checker run, in execution order. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    StructuralCheck,
    TagConflictCheck,
    SemanticCheck,
    Normalize,
    SegmentCheck,
    Done,
    Failed,
}

///
/// Inputs of one run. Absent inputs skip their stages.
///
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub pcgr_dir: PathBuf,
    pub input_vcf: Option<PathBuf>,
    pub input_cna_segments: Option<PathBuf>,
    pub config: CheckConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOutcome {
    /// Compressed, indexed, sample-free VCF
    pub ready_vcf: Option<PathBuf>,
    pub normalize: Option<NormalizeSummary>,
    pub n_segments: Option<usize>,
}

///
/// Runs the checks in a fixed order and stops at the first failure.
///
pub struct Pipeline<'a> {
    request: &'a CheckRequest,
    validator: &'a dyn StructuralValidator,
    compressor: &'a dyn Compressor,
    logger: &'a Logger,
    stage: Stage,
    history: Vec<Stage>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        request: &'a CheckRequest,
        validator: &'a dyn StructuralValidator,
        compressor: &'a dyn Compressor,
        logger: &'a Logger,
    ) -> Self {
        Pipeline {
            request,
            validator,
            compressor,
            logger,
            stage: Stage::Start,
            history: vec![Stage::Start],
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Every stage entered so far, terminal state included.
    pub fn history(&self) -> &[Stage] {
        &self.history
    }

    fn enter(&mut self, stage: Stage) {
        self.stage = stage;
        self.history.push(stage);
    }

    pub fn run(&mut self) -> CheckResult<CheckOutcome> {
        match self.run_stages() {
            Ok(outcome) => {
                self.enter(Stage::Done);
                Ok(outcome)
            }
            Err(err) => {
                self.logger
                    .error(format!("Input check failed during {:?}", self.stage));
                self.enter(Stage::Failed);
                Err(err)
            }
        }
    }

    fn run_stages(&mut self) -> CheckResult<CheckOutcome> {
        let mut outcome = CheckOutcome::default();

        if let Some(vcf) = self.request.input_vcf.clone() {
            let (ready_vcf, summary) = self.run_vcf_stages(&vcf)?;
            outcome.ready_vcf = Some(ready_vcf);
            outcome.normalize = Some(summary);
        }

        if let Some(segments) = self.request.input_cna_segments.clone() {
            self.enter(Stage::SegmentCheck);
            let segments = check_segment_file(&segments, self.logger)?;
            outcome.n_segments = Some(segments.len());
        }

        Ok(outcome)
    }

    fn run_vcf_stages(&mut self, vcf: &Path) -> CheckResult<(PathBuf, NormalizeSummary)> {
        let request = self.request;
        let config = &request.config;
        std::fs::create_dir_all(&config.output_dir)?;
        let paths = OutputPaths::new(&config.output_dir, vcf)?;

        self.enter(Stage::StructuralCheck);
        self.check_structure(vcf)?;

        self.enter(Stage::TagConflictCheck);
        let registry_paths =
            RegistryPaths::from_pcgr_dir(&request.pcgr_dir, config.databases.as_slice());
        let registry = TagRegistry::load(&registry_paths, self.logger)?;
        check_info_tags(vcf, &registry, self.logger)?;

        self.enter(Stage::SemanticCheck);
        check_records(vcf, self.logger)?;

        self.enter(Stage::Normalize);
        let summary = normalize_vcf(vcf, &paths.ready_vcf, self.logger)?;
        self.compressor.compress_and_index(&paths, self.logger)?;

        Ok((paths.ready_vcf_gz, summary))
    }

    fn check_structure(&self, vcf: &Path) -> CheckResult<()> {
        let version = &self.request.config.vcf_version;
        self.logger
            .info("Validating VCF file with EBIvariation/vcf-validator");

        let verdict = self.validator.validate(vcf, version)?;
        match verdict.status {
            VerdictStatus::Valid => {
                self.logger.info(format!(
                    "VCF file {} is valid according to {} specification",
                    vcf.display(),
                    version
                ));
                Ok(())
            }
            VerdictStatus::Invalid => {
                let err = CheckError::Structural {
                    version: version.clone(),
                    messages: verdict.errors,
                };
                self.logger.error(&err);
                Err(err)
            }
            VerdictStatus::Undetermined => {
                let err = CheckError::UndeterminedVerdict(vcf.display().to_string());
                self.logger.error(&err);
                Err(err)
            }
        }
    }
}

/// Process exit code for the result of a run: 0 on success, -1 on any failure.
pub fn exit_code<T>(result: &CheckResult<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => -1,
    }
}
