use std::path::Path;

use pcgr_core::models::VariantRecord;
use pcgr_core::{CheckError, CheckResult};
use pcgr_io::VcfReader;

use crate::consts::PREPROCESSING_DOCS;
use crate::logger::Logger;

const CHR_PREFIX: &str = "chr";

///
/// Per-record invariants: contig names without a `chr` prefix and a single
/// ALT allele.
///
pub fn check_record(record: &VariantRecord) -> CheckResult<()> {
    if record.contig.starts_with(CHR_PREFIX) {
        return Err(CheckError::ContigNaming {
            contig: record.contig.clone(),
        });
    }

    if record.is_multiallelic() {
        return Err(CheckError::Multiallelic {
            contig: record.contig.clone(),
            position: record.position,
            reference: record.reference.clone(),
            alternates: record.alt_string(),
        });
    }

    Ok(())
}

///
/// Stream the records of a VCF, stopping at the first record that breaks an
/// invariant. Returns the number of records checked.
///
pub fn check_records(vcf_path: &Path, logger: &Logger) -> CheckResult<usize> {
    let reader = VcfReader::from_path(vcf_path)?;
    let mut n_records = 0;

    for record in reader.records() {
        let record = record.inspect_err(|e| logger.error(e))?;
        if let Err(err) = check_record(&record) {
            match &err {
                CheckError::ContigNaming { .. } => {
                    logger.error(format!("{}, see {}", err, PREPROCESSING_DOCS));
                }
                CheckError::Multiallelic { .. } => {
                    logger.error(&err);
                    logger.error(format!(
                        "Alternative alleles must be decomposed, see {}",
                        PREPROCESSING_DOCS
                    ));
                }
                _ => logger.error(&err),
            }
            return Err(err);
        }
        n_records += 1;
    }

    logger.debug(format!(
        "{} records of {} passed contig and allele checks",
        n_records,
        vcf_path.display()
    ));
    Ok(n_records)
}
