use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pcgr_core::CheckError;

use crate::consts::*;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    pub vcf_validator: String,
    pub bgzip: String,
    pub tabix: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            vcf_validator: DEFAULT_VCF_VALIDATOR.to_string(),
            bgzip: DEFAULT_BGZIP.to_string(),
            tabix: DEFAULT_TABIX.to_string(),
        }
    }
}

///
/// Settings of one checker run. Every field has a default, so a config file
/// only needs the keys it overrides.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    pub output_dir: PathBuf,
    pub vcf_version: String,
    pub databases: Vec<String>,
    pub tools: ToolConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            vcf_version: DEFAULT_VCF_VERSION.to_string(),
            databases: DEFAULT_DATABASES.iter().map(|db| db.to_string()).collect(),
            tools: ToolConfig::default(),
        }
    }
}

impl TryFrom<&Path> for CheckConfig {
    type Error = CheckError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: CheckConfig = toml::from_str(&toml_str)
            .map_err(|e| CheckError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}
