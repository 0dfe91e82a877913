use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::errors::{CheckError, CheckResult};

/// Literal used on the command line for an input that was not provided.
pub const NONE_SENTINEL: &str = "None";

const READY_SUFFIX: &str = ".pcgr_ready.vcf";
const VALIDATOR_REPORT_SUFFIX: &str = ".vcf_validator_output";

///
/// Map the `None` sentinel to an absent path.
///
pub fn optional_input(arg: &str) -> Option<PathBuf> {
    if arg == NONE_SENTINEL {
        None
    } else {
        Some(PathBuf::from(arg))
    }
}

pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> CheckResult<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| {
        CheckError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open file {}: {}", path.display(), e),
        ))
    })?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// File name of the input VCF with its `.vcf` or `.vcf.gz` suffix removed.
/// Names without either suffix are kept whole.
///
pub fn vcf_stem(input_vcf: &Path) -> CheckResult<String> {
    let name = input_vcf
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| {
            CheckError::Config(format!(
                "VCF path has no valid UTF-8 file name: {}",
                input_vcf.display()
            ))
        })?;

    let stem = name
        .strip_suffix(".vcf.gz")
        .or_else(|| name.strip_suffix(".vcf"))
        .unwrap_or(name);

    Ok(stem.to_string())
}

///
/// Every file the checker writes for one input VCF.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Sorted, sample-free, uncompressed VCF (`<stem>.pcgr_ready.vcf`)
    pub ready_vcf: PathBuf,
    /// bgzip-compressed form of `ready_vcf`
    pub ready_vcf_gz: PathBuf,
    /// tabix index of `ready_vcf_gz`
    pub ready_vcf_index: PathBuf,
    /// Transient vcf_validator report
    pub validator_report: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, input_vcf: &Path) -> CheckResult<Self> {
        let stem = vcf_stem(input_vcf)?;
        let ready_name = format!("{}{}", stem, READY_SUFFIX);

        Ok(OutputPaths {
            ready_vcf: output_dir.join(&ready_name),
            ready_vcf_gz: output_dir.join(format!("{}.gz", ready_name)),
            ready_vcf_index: output_dir.join(format!("{}.gz.tbi", ready_name)),
            validator_report: output_dir.join(format!("{}{}", stem, VALIDATOR_REPORT_SUFFIX)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/data/input/tumor.vcf.gz", "tumor")]
    #[case("tumor.vcf", "tumor")]
    #[case("sample.somatic.vcf", "sample.somatic")]
    #[case("calls.txt", "calls.txt")]
    fn test_vcf_stem(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(vcf_stem(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    fn test_output_paths() {
        let paths =
            OutputPaths::new(Path::new("/workdir/output"), Path::new("/in/tumor.vcf.gz")).unwrap();

        assert_eq!(
            paths.ready_vcf,
            PathBuf::from("/workdir/output/tumor.pcgr_ready.vcf")
        );
        assert_eq!(
            paths.ready_vcf_gz,
            PathBuf::from("/workdir/output/tumor.pcgr_ready.vcf.gz")
        );
        assert_eq!(
            paths.ready_vcf_index,
            PathBuf::from("/workdir/output/tumor.pcgr_ready.vcf.gz.tbi")
        );
        assert_eq!(
            paths.validator_report,
            PathBuf::from("/workdir/output/tumor.vcf_validator_output")
        );
    }

    #[rstest]
    #[case("None", None)]
    #[case("segments.tsv", Some(PathBuf::from("segments.tsv")))]
    fn test_optional_input(#[case] arg: &str, #[case] expected: Option<PathBuf>) {
        assert_eq!(optional_input(arg), expected);
    }

    #[rstest]
    fn test_dynamic_reader_reads_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.vcf.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        writeln!(encoder, "##fileformat=VCFv4.2").unwrap();
        encoder.finish().unwrap();

        let lines: Vec<String> = get_dynamic_reader(&path)
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["##fileformat=VCFv4.2".to_string()]);
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        let result = get_dynamic_reader(Path::new("does/not/exist.vcf"));
        assert!(matches!(result, Err(CheckError::Io(_))));
    }
}
