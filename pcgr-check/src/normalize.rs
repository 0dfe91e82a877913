use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use pcgr_core::CheckResult;
use pcgr_core::models::variant::VCF_FIXED_COLUMNS;
use pcgr_core::models::sort::truncate_columns;
use pcgr_core::models::{SortDomain, SortKey};
use pcgr_core::utils::get_dynamic_reader;
use pcgr_io::COLUMN_HEADER_PREFIX;

use crate::logger::Logger;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub meta_lines: usize,
    pub numeric_records: usize,
    pub symbolic_records: usize,
    /// Sample columns dropped from the `#CHROM` line (FORMAT included)
    pub dropped_columns: usize,
}

impl NormalizeSummary {
    pub fn n_records(&self) -> usize {
        self.numeric_records + self.symbolic_records
    }
}

///
/// Rewrite a VCF as a sorted, sample-free VCF.
///
/// `##` lines are copied in order, the `#CHROM` line and every record are cut
/// to the eight fixed columns, and records are sorted within their
/// [`SortDomain`], numeric contigs first. Running it on its own output gives
/// back the same bytes.
///
pub fn normalize_to_writer<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> CheckResult<NormalizeSummary> {
    let mut summary = NormalizeSummary::default();
    let mut column_lines: Vec<String> = Vec::new();
    let mut numeric: Vec<SortKey> = Vec::new();
    let mut symbolic: Vec<SortKey> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.starts_with("##") {
            writeln!(writer, "{}", line)?;
            summary.meta_lines += 1;
        } else if line.starts_with(COLUMN_HEADER_PREFIX) {
            let n_columns = line.split('\t').count();
            summary.dropped_columns += n_columns.saturating_sub(VCF_FIXED_COLUMNS);
            column_lines.push(truncate_columns(line, VCF_FIXED_COLUMNS).to_string());
        } else if line.starts_with('#') || line.trim().is_empty() {
            continue;
        } else {
            let key = SortKey::from_data_line(line);
            match key.domain() {
                SortDomain::Numeric => numeric.push(key),
                SortDomain::Symbolic => symbolic.push(key),
            }
        }
    }

    for column_line in &column_lines {
        writeln!(writer, "{}", column_line)?;
    }

    for (domain, keys) in [
        (SortDomain::Numeric, &mut numeric),
        (SortDomain::Symbolic, &mut symbolic),
    ] {
        keys.sort_by(domain.comparator());
        for key in keys.iter() {
            writeln!(writer, "{}", key.line)?;
        }
    }

    summary.numeric_records = numeric.len();
    summary.symbolic_records = symbolic.len();
    writer.flush()?;

    Ok(summary)
}

///
/// Normalize `input` (plain or gzipped) into the uncompressed file `output`.
///
pub fn normalize_vcf(
    input: &Path,
    output: &Path,
    logger: &Logger,
) -> CheckResult<NormalizeSummary> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let reader = get_dynamic_reader(input)?;
    let mut writer = BufWriter::new(File::create(output)?);
    let summary = normalize_to_writer(reader, &mut writer)?;

    logger.info(format!(
        "Wrote sample-free VCF {} ({} records: {} numeric contigs, {} X/Y/M contigs)",
        output.display(),
        summary.n_records(),
        summary.numeric_records,
        summary.symbolic_records
    ));

    Ok(summary)
}
