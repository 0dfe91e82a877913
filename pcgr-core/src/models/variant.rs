use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::errors::{CheckError, CheckResult};

/// Number of fixed, sample-independent columns in a VCF data line.
pub const VCF_FIXED_COLUMNS: usize = 8;

///
/// One data line of a VCF file, restricted to the eight fixed columns.
///
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
    pub contig: String,
    /// 1-based position
    pub position: u64,
    pub id: String,
    pub reference: String,
    pub alternates: Vec<String>,
    pub info: HashMap<String, String>,
}

impl VariantRecord {
    ///
    /// Parse a tab-separated VCF data line. Sample columns, if any, are ignored.
    ///
    /// # Arguments
    /// - line: the raw data line, without the trailing newline
    /// - line_number: 1-based line number used in error messages
    ///
    pub fn from_vcf_line(line: &str, line_number: usize) -> CheckResult<Self> {
        let fields: Vec<&str> = line.splitn(VCF_FIXED_COLUMNS + 1, '\t').collect();
        if fields.len() < VCF_FIXED_COLUMNS {
            return Err(CheckError::RecordParse {
                line: line_number,
                reason: format!(
                    "expected at least {} tab-separated columns, found {}",
                    VCF_FIXED_COLUMNS,
                    fields.len()
                ),
            });
        }

        let position = fields[1]
            .parse::<u64>()
            .map_err(|_| CheckError::RecordParse {
                line: line_number,
                reason: format!("POS is not an integer: {}", fields[1]),
            })?;

        let alternates = match fields[4] {
            "." | "" => Vec::new(),
            alt => alt.split(',').map(str::to_string).collect(),
        };

        Ok(VariantRecord {
            contig: fields[0].to_string(),
            position,
            id: fields[2].to_string(),
            reference: fields[3].to_string(),
            alternates,
            info: parse_info_field(fields[7]),
        })
    }

    pub fn is_multiallelic(&self) -> bool {
        self.alternates.len() > 1
    }

    /// Comma-joined ALT column, as written in the file.
    pub fn alt_string(&self) -> String {
        if self.alternates.is_empty() {
            ".".to_string()
        } else {
            self.alternates.join(",")
        }
    }
}

impl Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.contig,
            self.position,
            self.reference,
            self.alt_string()
        )
    }
}

/// Split an INFO column into key/value pairs. Flags map to an empty value.
pub fn parse_info_field(info: &str) -> HashMap<String, String> {
    if info == "." || info.is_empty() {
        return HashMap::new();
    }

    info.split(';')
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (entry.to_string(), String::new()),
        })
        .collect()
}
