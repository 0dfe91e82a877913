use std::path::Path;

use pcgr_core::models::CnaSegment;
use pcgr_core::{CheckError, CheckResult};
use pcgr_io::TsvTable;

use crate::consts::SEGMENT_COLUMNS;
use crate::logger::Logger;

const NON_INTEGER: &str = "non-integer";
const NON_NUMERICAL: &str = "non-numerical";

fn is_integer(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok()
}

fn is_numeric(value: &str) -> bool {
    !value.trim().is_empty() && value.trim().parse::<f64>().is_ok()
}

///
/// Validate a copy-number segment table.
///
/// Checks, in order and stopping at the first failure: the required columns,
/// the column types (`Start`, `End` integer; `Segment_Mean` numeric) over all
/// rows, then each row's range (`End >= Start`, both positive).
///
pub fn check_segment_table(table: &TsvTable, path: &Path) -> CheckResult<Vec<CnaSegment>> {
    if !table.has_columns(&SEGMENT_COLUMNS) {
        return Err(CheckError::SegmentFormat {
            path: path.display().to_string(),
            present: table.columns.clone(),
        });
    }

    // has_columns guarantees every index
    let [chrom_idx, start_idx, end_idx, mean_idx] =
        SEGMENT_COLUMNS.map(|c| table.column_index(c).unwrap_or_default());

    let type_checks: [(&str, usize, fn(&str) -> bool, &'static str); 3] = [
        ("Start", start_idx, is_integer, NON_INTEGER),
        ("End", end_idx, is_integer, NON_INTEGER),
        ("Segment_Mean", mean_idx, is_numeric, NON_NUMERICAL),
    ];

    for (column, idx, valid, expected) in type_checks {
        if !table.column_values(idx).all(valid) {
            return Err(CheckError::SegmentType {
                column: column.to_string(),
                expected,
            });
        }
    }

    let mut segments = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
        let (chromosome, start_raw, end_raw) = (field(chrom_idx), field(start_idx), field(end_idx));

        let start = start_raw.trim().parse::<i64>().unwrap_or_default();
        let end = end_raw.trim().parse::<i64>().unwrap_or_default();
        let segment_mean = field(mean_idx).trim().parse::<f64>().unwrap_or(f64::NAN);

        if end < start {
            return Err(CheckError::SegmentStartAfterEnd {
                chromosome: chromosome.to_string(),
                start: start_raw.to_string(),
                end: end_raw.to_string(),
            });
        }
        if start < 1 || end < 1 {
            return Err(CheckError::SegmentNonPositive {
                chromosome: chromosome.to_string(),
                start: start_raw.to_string(),
                end: end_raw.to_string(),
            });
        }

        segments.push(CnaSegment {
            chromosome: chromosome.to_string(),
            start,
            end,
            segment_mean,
        });
    }

    Ok(segments)
}

///
/// Read and validate a copy-number segment file, logging the outcome.
///
pub fn check_segment_file(path: &Path, logger: &Logger) -> CheckResult<Vec<CnaSegment>> {
    let table = TsvTable::from_path(path).inspect_err(|e| logger.error(e))?;

    match check_segment_table(&table, path) {
        Ok(segments) => {
            logger.info(format!(
                "Copy number segment file ({}) adheres to the correct format",
                path.display()
            ));
            Ok(segments)
        }
        Err(err) => {
            logger.error(&err);
            if let CheckError::SegmentFormat { present, .. } = &err {
                logger.error(format!("Column names present in file: {:?}", present));
            }
            Err(err)
        }
    }
}
