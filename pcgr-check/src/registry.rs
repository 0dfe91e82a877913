use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use pcgr_core::models::InfoTagDeclaration;
use pcgr_core::utils::get_dynamic_reader;
use pcgr_core::{CheckError, CheckResult};
use pcgr_io::TsvTable;

use crate::consts::*;
use crate::logger::Logger;

///
/// Locations of every file that contributes reserved INFO tags.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPaths {
    pub description_tables: Vec<PathBuf>,
    pub database_files: Vec<PathBuf>,
}

impl RegistryPaths {
    ///
    /// Standard layout under a PCGR base directory.
    ///
    /// # Arguments
    /// - pcgr_dir: PCGR base directory (containing `data/`)
    /// - databases: database names, each contributing `data/<db>/<db>.vcfanno.vcf_info_tags.txt`
    ///
    pub fn from_pcgr_dir<S: AsRef<str>>(pcgr_dir: &Path, databases: &[S]) -> Self {
        let data_dir = pcgr_dir.join("data");

        let description_tables = DESCRIPTION_TABLES
            .iter()
            .map(|table| data_dir.join(table))
            .collect();

        let database_files = databases
            .iter()
            .map(|db| {
                let db = db.as_ref();
                data_dir
                    .join(db)
                    .join(format!("{}{}", db, DATABASE_TAG_FILE_SUFFIX))
            })
            .collect();

        RegistryPaths {
            description_tables,
            database_files,
        }
    }
}

///
/// INFO tags reserved by the annotation pipeline. Built once per run and
/// read-only afterwards.
///
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    description_tags: HashSet<String>,
    database_tags: HashSet<String>,
}

impl TagRegistry {
    ///
    /// Build the registry from the description tables and database tag files.
    ///
    /// A missing description table is an error. A database tag file that is
    /// missing or unreadable is logged and skipped, leaving a partial registry.
    ///
    pub fn load(paths: &RegistryPaths, logger: &Logger) -> CheckResult<Self> {
        let mut registry = TagRegistry::default();

        for table in &paths.description_tables {
            registry
                .description_tags
                .extend(read_description_table(table)?);
        }

        for file in &paths.database_files {
            match read_database_tags(file, &mut registry.database_tags) {
                Ok(()) => {}
                Err(e) if !e.is_fatal() => logger.error(e),
                Err(e) => return Err(e),
            }
        }

        logger.debug(format!(
            "Loaded {} description tags and {} database tags",
            registry.description_tags.len(),
            registry.database_tags.len()
        ));

        Ok(registry)
    }

    ///
    /// Whether a tag id is reserved. `EFFECT_PREDICTIONS` is always reserved.
    ///
    pub fn contains(&self, tag: &str) -> bool {
        self.description_tags.contains(tag)
            || self.database_tags.contains(tag)
            || tag == EFFECT_PREDICTIONS_TAG
    }
}

/// First column of a tab-separated table with a header row.
fn read_description_table(path: &Path) -> CheckResult<HashSet<String>> {
    let table = TsvTable::from_path(path)?;
    Ok(table
        .column_values(0)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect())
}

///
/// Add the tag ids of the `##INFO=<ID=...` lines of a vcfanno tag file to
/// `tags`. Any I/O failure is reported as a missing file; tags read before
/// the failure are kept.
///
fn read_database_tags(path: &Path, tags: &mut HashSet<String>) -> CheckResult<()> {
    let missing = || CheckError::MissingDatabaseFile {
        path: path.to_path_buf(),
    };

    let reader = get_dynamic_reader(path).map_err(|_| missing())?;
    for line in reader.lines() {
        let line = line.map_err(|_| missing())?;
        if let Some(tag) = InfoTagDeclaration::id_from_meta_line(&line) {
            tags.insert(tag.to_string());
        }
    }
    Ok(())
}
