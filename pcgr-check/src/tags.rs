use std::path::Path;

use pcgr_core::models::InfoTagDeclaration;
use pcgr_core::{CheckError, CheckResult};
use pcgr_io::read_vcf_header;

use crate::consts::EXEMPT_TAG;
use crate::logger::Logger;
use crate::registry::TagRegistry;

///
/// First header-declared INFO tag that is reserved by the registry, skipping
/// the exempt `STRAND` tag. Declarations after the first hit are not looked at.
///
pub fn first_conflict<'a>(
    declarations: &'a [InfoTagDeclaration],
    registry: &TagRegistry,
) -> Option<&'a InfoTagDeclaration> {
    declarations
        .iter()
        .find(|decl| decl.id != EXEMPT_TAG && registry.contains(&decl.id))
}

///
/// Check that no INFO tag declared in the query VCF collides with a tag the
/// annotation pipeline produces.
///
pub fn check_info_tags(
    vcf_path: &Path,
    registry: &TagRegistry,
    logger: &Logger,
) -> CheckResult<()> {
    logger.info("Checking if existing INFO tags of query VCF file coincide with PCGR INFO tags");

    let header = read_vcf_header(vcf_path)?;
    let declarations = header.info_declarations();

    if let Some(conflict) = first_conflict(&declarations, registry) {
        let err = CheckError::TagConflict {
            tag: conflict.id.clone(),
        };
        logger.error(&err);
        return Err(err);
    }

    logger.info("No query VCF INFO tags coincide with PCGR INFO tags");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::consts::DEFAULT_DATABASES;
    use crate::registry::RegistryPaths;

    #[fixture]
    fn registry() -> TagRegistry {
        let paths =
            RegistryPaths::from_pcgr_dir(&PathBuf::from("../tests/data/pcgr"), &DEFAULT_DATABASES);
        TagRegistry::load(&paths, &Logger::default()).unwrap()
    }

    fn declarations(ids: &[&str]) -> Vec<InfoTagDeclaration> {
        ids.iter().map(|id| InfoTagDeclaration::header(*id)).collect()
    }

    #[rstest]
    fn test_no_conflict(registry: TagRegistry) {
        let decls = declarations(&["DP", "SOMATIC", "TDP"]);
        assert!(first_conflict(&decls, &registry).is_none());
    }

    #[rstest]
    fn test_strand_is_exempt(registry: TagRegistry) {
        assert!(registry.contains("STRAND"));
        let decls = declarations(&["STRAND", "DP"]);
        assert!(first_conflict(&decls, &registry).is_none());
    }

    #[rstest]
    #[case(&["DP", "DOCM_PMID", "CSQ"], "DOCM_PMID")]
    #[case(&["CSQ", "DOCM_PMID"], "CSQ")]
    #[case(&["STRAND", "EFFECT_PREDICTIONS"], "EFFECT_PREDICTIONS")]
    fn test_first_conflict_wins(
        registry: TagRegistry,
        #[case] ids: &[&str],
        #[case] expected: &str,
    ) {
        let decls = declarations(ids);
        let conflict = first_conflict(&decls, &registry).unwrap();
        assert_eq!(conflict.id, expected);
    }

    #[rstest]
    fn test_check_info_tags_on_file(registry: TagRegistry) {
        let clean = Path::new("../tests/data/vcf/clean.vcf");
        assert!(check_info_tags(clean, &registry, &Logger::default()).is_ok());

        let conflicting = Path::new("../tests/data/vcf/tag_conflict.vcf");
        match check_info_tags(conflicting, &registry, &Logger::default()) {
            Err(CheckError::TagConflict { tag }) => assert_eq!(tag, "DOCM_PMID"),
            other => panic!("expected a tag conflict, got {:?}", other),
        }
    }
}
