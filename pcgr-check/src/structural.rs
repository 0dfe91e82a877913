//! Structural (grammar) validation of a VCF by the external `vcf_validator`.
//!
//! The report parser is kept apart from the process invocation so that it can
//! be exercised against captured transcripts.
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use pcgr_core::utils::{OutputPaths, get_dynamic_reader, is_gzipped};
use pcgr_core::{CheckError, CheckResult};

static IGNORED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(warning\)$|^Reading from ").expect("valid regex"));

const ERROR_PREFIX: &str = "Line ";
const VALID_SUFFIX: &str = "the input file is valid";
const INVALID_SUFFIX: &str = "the input file is not valid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Valid,
    Invalid,
    /// The report carried neither terminal line.
    Undetermined,
}

///
/// Outcome of one structural check: a status and the line-referenced errors
/// reported by the validator, in report order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub status: VerdictStatus,
    pub errors: Vec<String>,
}

impl ValidationVerdict {
    ///
    /// Classify the textual report of the validator.
    ///
    pub fn from_report(report: &str) -> Self {
        let mut status = VerdictStatus::Undetermined;
        let mut errors = Vec::new();

        for line in report.lines() {
            let line = line.trim_end();
            if IGNORED_LINE.is_match(line) {
                continue;
            }
            if line.starts_with(ERROR_PREFIX) {
                errors.push(line.to_string());
            }
            if line.ends_with(VALID_SUFFIX) {
                status = VerdictStatus::Valid;
            }
            if line.ends_with(INVALID_SUFFIX) {
                status = VerdictStatus::Invalid;
            }
        }

        ValidationVerdict { status, errors }
    }

    /// Only an explicit "valid" verdict counts as valid.
    pub fn is_valid(&self) -> bool {
        self.status == VerdictStatus::Valid
    }
}

pub trait StructuralValidator {
    ///
    /// Check a VCF against the given specification version (e.g. `v4.2`).
    ///
    fn validate(&self, vcf_path: &Path, version: &str) -> CheckResult<ValidationVerdict>;
}

/// Removes the report file when dropped, whatever the outcome of the check.
struct ReportFile {
    path: PathBuf,
}

impl Drop for ReportFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

///
/// Runs the `vcf_validator` program, writing its report next to the other
/// outputs of the run. Compressed input is decompressed in-process and fed on
/// stdin.
///
#[derive(Debug, Clone)]
pub struct VcfValidatorCommand {
    program: String,
    output_dir: PathBuf,
}

impl VcfValidatorCommand {
    pub fn new(program: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        VcfValidatorCommand {
            program: program.into(),
            output_dir: output_dir.into(),
        }
    }

    fn run(&self, vcf_path: &Path, version: &str, report_path: &Path) -> CheckResult<()> {
        let report = File::create(report_path)?;

        let mut cmd = Command::new(&self.program);
        cmd.args(["--version", version]).stdout(Stdio::from(report));

        let compressed = is_gzipped(vcf_path);
        if compressed {
            cmd.stdin(Stdio::piped());
        } else {
            cmd.arg("--input").arg(vcf_path);
        }

        let mut child = cmd.spawn().map_err(|e| {
            CheckError::Io(io::Error::new(
                e.kind(),
                format!("Failed to run {}: {}", self.program, e),
            ))
        })?;

        let fed = match child.stdin.take() {
            Some(stdin) => feed_decompressed(vcf_path, stdin),
            None => Ok(()),
        };
        if fed.is_err() {
            let _ = child.kill();
        }

        // exit status is not meaningful: the verdict is read from the report
        child.wait()?;
        fed
    }
}

/// Stream the decompressed VCF into the validator. Dropping `stdin` closes the pipe.
fn feed_decompressed(vcf_path: &Path, mut stdin: ChildStdin) -> CheckResult<()> {
    let mut reader = get_dynamic_reader(vcf_path)?;
    match io::copy(&mut reader, &mut stdin).and_then(|_| stdin.flush()) {
        Ok(()) => Ok(()),
        // the validator may stop reading early on a fatal error
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl StructuralValidator for VcfValidatorCommand {
    fn validate(&self, vcf_path: &Path, version: &str) -> CheckResult<ValidationVerdict> {
        let paths = OutputPaths::new(&self.output_dir, vcf_path)?;
        let report = ReportFile {
            path: paths.validator_report,
        };

        self.run(vcf_path, version, &report.path)?;
        let text = fs::read_to_string(&report.path)?;

        Ok(ValidationVerdict::from_report(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const VALID_REPORT: &str = "\
Reading from input file...
Line 12: Sample #1, field PL does not match the meta specification Number=G (warning)
According to the VCF specification, the input file is valid
";

    const INVALID_REPORT: &str = "\
Reading from standard input...
Line 4: Chromosome name 'chr 1' contains white-spaces
Line 5: Contig is not sorted by position (warning)
Line 9: Reference and alternate alleles are the same
According to the VCF specification, the input file is not valid
";

    #[rstest]
    fn test_valid_report_ignores_warnings() {
        let verdict = ValidationVerdict::from_report(VALID_REPORT);
        assert_eq!(verdict.status, VerdictStatus::Valid);
        assert!(verdict.errors.is_empty());
        assert!(verdict.is_valid());
    }

    #[rstest]
    fn test_invalid_report_collects_errors_in_order() {
        let verdict = ValidationVerdict::from_report(INVALID_REPORT);
        assert_eq!(verdict.status, VerdictStatus::Invalid);
        assert_eq!(
            verdict.errors,
            vec![
                "Line 4: Chromosome name 'chr 1' contains white-spaces".to_string(),
                "Line 9: Reference and alternate alleles are the same".to_string(),
            ]
        );
        assert!(!verdict.is_valid());
    }

    #[rstest]
    #[case("")]
    #[case("Segmentation fault\n")]
    #[case("Line 1: truncated output\n")]
    fn test_report_without_verdict_is_undetermined(#[case] report: &str) {
        let verdict = ValidationVerdict::from_report(report);
        assert_eq!(verdict.status, VerdictStatus::Undetermined);
        assert!(!verdict.is_valid());
    }

    #[rstest]
    fn test_windows_line_endings() {
        let verdict = ValidationVerdict::from_report(
            "Line 2: bad header\r\nthe input file is not valid\r\n",
        );
        assert_eq!(verdict.status, VerdictStatus::Invalid);
        assert_eq!(verdict.errors, vec!["Line 2: bad header".to_string()]);
    }

    #[cfg(unix)]
    #[rstest]
    fn test_report_file_is_removed_after_validation() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake_validator.sh");
        fs::write(
            &script,
            "#!/bin/sh\necho 'Line 3: broken record'\necho 'the input file is not valid'\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let vcf = dir.path().join("tumor.vcf");
        fs::write(&vcf, "##fileformat=VCFv4.2\n").unwrap();

        let validator = VcfValidatorCommand::new(script.to_str().unwrap(), dir.path());
        let verdict = validator.validate(&vcf, "v4.2").unwrap();

        assert_eq!(verdict.status, VerdictStatus::Invalid);
        assert_eq!(verdict.errors, vec!["Line 3: broken record".to_string()]);
        assert!(!dir.path().join("tumor.vcf_validator_output").exists());
    }

    #[cfg(unix)]
    #[rstest]
    fn test_compressed_input_is_fed_on_stdin() {
        use std::os::unix::fs::PermissionsExt;

        use flate2::Compression;
        use flate2::write::GzEncoder;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake_validator.sh");
        fs::write(
            &script,
            "#!/bin/sh\n\
             [ \"$3\" = \"--input\" ] && exit 1\n\
             n=$(grep -c '^1\t')\n\
             echo \"Line 1: saw $n records\"\n\
             echo 'the input file is valid'\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let vcf = dir.path().join("tumor.vcf.gz");
        let mut encoder = GzEncoder::new(File::create(&vcf).unwrap(), Compression::default());
        encoder
            .write_all(
                b"##fileformat=VCFv4.2\n\
                  #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
                  1\t100\t.\tA\tT\t.\tPASS\t.\n\
                  1\t200\t.\tC\tG\t.\tPASS\t.\n",
            )
            .unwrap();
        encoder.finish().unwrap();

        let validator = VcfValidatorCommand::new(script.to_str().unwrap(), dir.path());
        let verdict = validator.validate(&vcf, "v4.2").unwrap();

        assert_eq!(verdict.status, VerdictStatus::Valid);
        assert_eq!(verdict.errors, vec!["Line 1: saw 2 records".to_string()]);
        assert!(!dir.path().join("tumor.vcf_validator_output").exists());
    }

    #[cfg(unix)]
    #[rstest]
    fn test_unreadable_compressed_input_still_waits_for_validator() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake_validator.sh");
        fs::write(
            &script,
            "#!/bin/sh\ncat > /dev/null\necho 'the input file is valid'\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        // a .gz name with plain text content
        let vcf = dir.path().join("tumor.vcf.gz");
        fs::write(&vcf, "##fileformat=VCFv4.2\n").unwrap();

        let validator = VcfValidatorCommand::new(script.to_str().unwrap(), dir.path());
        let result = validator.validate(&vcf, "v4.2");

        assert!(matches!(result, Err(CheckError::Io(_))));
        assert!(!dir.path().join("tumor.vcf_validator_output").exists());
    }

    #[rstest]
    fn test_missing_program_still_removes_report() {
        let dir = tempfile::tempdir().unwrap();
        let vcf = dir.path().join("tumor.vcf");
        fs::write(&vcf, "##fileformat=VCFv4.2\n").unwrap();

        let validator = VcfValidatorCommand::new("definitely-not-a-vcf-validator", dir.path());
        let result = validator.validate(&vcf, "v4.2");

        assert!(matches!(result, Err(CheckError::Io(_))));
        assert!(!dir.path().join("tumor.vcf_validator_output").exists());
    }
}
