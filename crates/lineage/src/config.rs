//! Configuration file support.
//!
//! A `lineage.yaml` file holds defaults for the CLI. Every key is optional:
//!
//! ```yaml
//! traversal:
//!   max-depth: 6
//!   include-indirect: true
//!   directionality: downstream
//!   exclude-types: [dashboard]
//! change-type: schema
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::ChangeType;
use crate::error::{Error, Result};
use crate::options::BuildOptions;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lineage.yaml";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LineageConfig {
    /// Traversal defaults for graph builds
    pub traversal: BuildOptions,

    /// Default change type for impact analysis
    pub change_type: ChangeType,
}

impl LineageConfig {
    /// Parse configuration from YAML text and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed YAML and
    /// [`Error::InvalidOptions`] if the traversal section is invalid.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.traversal.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load `lineage.yaml` from `dir` if present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "Loading configuration");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
