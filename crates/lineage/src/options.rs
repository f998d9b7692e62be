//! Traversal options for graph builds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default traversal depth
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Hard ceiling on `max_depth`
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Which edges the builder follows from each node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directionality {
    /// Follow edges into a node, toward its sources
    Upstream,
    /// Follow edges out of a node, toward its consumers
    Downstream,
    /// Explore upstream and downstream independently from the root
    #[default]
    Both,
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upstream => "upstream",
            Self::Downstream => "downstream",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for Directionality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upstream" | "up" => Ok(Self::Upstream),
            "downstream" | "down" => Ok(Self::Downstream),
            "both" => Ok(Self::Both),
            other => Err(Error::InvalidOptions(format!(
                "unknown directionality '{other}' (expected upstream, downstream or both)"
            ))),
        }
    }
}

/// Options controlling a graph build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildOptions {
    /// Deepest level to visit (root = 0)
    pub max_depth: usize,

    /// When false, only the root's direct neighbors are added
    pub include_indirect: bool,

    /// Allow-list of asset types; wins over `exclude_types` when non-empty
    pub filter_types: Vec<String>,

    /// Deny-list of asset types
    pub exclude_types: Vec<String>,

    /// Edge direction to follow
    pub directionality: Directionality,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            include_indirect: true,
            filter_types: Vec::new(),
            exclude_types: Vec::new(),
            directionality: Directionality::Both,
        }
    }
}

impl BuildOptions {
    /// Set the maximum depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the directionality
    #[must_use]
    pub fn with_directionality(mut self, directionality: Directionality) -> Self {
        self.directionality = directionality;
        self
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if `max_depth` exceeds
    /// [`MAX_TRAVERSAL_DEPTH`] or a type filter entry is blank.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_TRAVERSAL_DEPTH {
            return Err(Error::InvalidOptions(format!(
                "max depth {} exceeds the limit of {}",
                self.max_depth, MAX_TRAVERSAL_DEPTH
            )));
        }

        let blank = self
            .filter_types
            .iter()
            .chain(&self.exclude_types)
            .any(|t| t.trim().is_empty());
        if blank {
            return Err(Error::InvalidOptions(
                "type filters must not contain empty entries".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether assets of `asset_type` pass the type filters.
    #[must_use]
    pub fn allows_type(&self, asset_type: &str) -> bool {
        if !self.filter_types.is_empty() {
            return self.filter_types.iter().any(|t| t == asset_type);
        }
        !self.exclude_types.iter().any(|t| t == asset_type)
    }
}
