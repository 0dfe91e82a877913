use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(
        "VCF file is NOT valid according to {version} specification:\n{}",
        .messages.join("\n")
    )]
    Structural {
        version: String,
        messages: Vec<String>,
    },

    #[error("VCF validator report did not contain a verdict for {0}")]
    UndeterminedVerdict(String),

    #[error(
        "INFO tag {tag} in the query VCF coincides with a VCF annotation tag produced by PCGR - please remove or rename this tag in your query VCF"
    )]
    TagConflict { tag: String },

    #[error("'chr' must be stripped from chromosome names: {contig}")]
    ContigNaming { contig: String },

    #[error("Multiallelic site detected:{contig}\t{position}\t{reference}\t{alternates}")]
    Multiallelic {
        contig: String,
        position: u64,
        reference: String,
        alternates: String,
    },

    #[error("Malformed VCF record at line {line}: {reason}")]
    RecordParse { line: usize, reason: String },

    #[error(
        "Copy number segment file ({path}) is missing required column(s): 'Chromosome', 'Start', 'End', or 'Segment_Mean'"
    )]
    SegmentFormat { path: String, present: Vec<String> },

    #[error("'{column}' column of copy number segment file contains {expected} values")]
    SegmentType {
        column: String,
        expected: &'static str,
    },

    #[error(
        "Detected wrongly formatted chromosomal segment - 'Start' is greater than 'End' ({chromosome}:{start}-{end})"
    )]
    SegmentStartAfterEnd {
        chromosome: String,
        start: String,
        end: String,
    },

    #[error(
        "Detected wrongly formatted chromosomal segment - 'Start' or 'End' is less than or equal to zero ({chromosome}:{start}-{end})"
    )]
    SegmentNonPositive {
        chromosome: String,
        start: String,
        end: String,
    },

    #[error("File {} does not exist", .path.display())]
    MissingDatabaseFile { path: PathBuf },

    #[error("{tool} exited with {status}")]
    Tool { tool: String, status: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Whether the error aborts the run. Only absent database tag files are tolerated.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CheckError::MissingDatabaseFile { .. })
    }
}

pub type CheckResult<T> = std::result::Result<T, CheckError>;
