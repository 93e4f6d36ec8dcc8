//! # Configuration Schema and Parsing
//!
//! This module defines the data structure that represents the `.ddply`
//! configuration file, as well as the logic for parsing it.
//!
//! The format is a YAML document with a single recognized key, `shared`,
//! whose value is a sequence of relative paths (from the source root) that
//! should be linked into the destination rather than copied:
//!
//! ```yaml
//! shared:
//!   - var/uploads
//!   - var/cache
//! ```
//!
//! Unknown keys are ignored, a missing `shared` key yields an empty list,
//! and an empty document parses to the default configuration. The
//! configuration is loaded once at startup and is immutable afterwards.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parsed `.ddply` configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Relative paths (from the source root) that are shared between
    /// deployments and therefore symlinked into the destination instead of
    /// copied. Order is preserved; duplicates are allowed and cause
    /// redundant but harmless relink operations.
    #[serde(default)]
    pub shared: Vec<String>,
}

/// Parse a YAML configuration document.
///
/// An empty or comment-only document yields the default (empty) config.
pub fn parse(input: &str) -> Result<Config> {
    let config: Option<Config> = serde_yaml::from_str(input)?;
    Ok(config.unwrap_or_default())
}

/// Read and parse a configuration file from disk.
pub fn from_file(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    parse(&raw)
}
