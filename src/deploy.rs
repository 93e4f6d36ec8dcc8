//! # Deploy Orchestration
//!
//! Sequences one deploy run: decide the operating mode from the
//! configuration, then drive [`crate::filesystem`] and [`crate::link`].
//!
//! ## Modes
//!
//! - **Link-only**: no configuration file is found (and none was explicitly
//!   required). The destination root itself becomes a single symlink to the
//!   source root; nothing is copied.
//! - **Copy-and-link**: a configuration file is found and parses. The whole
//!   tree is copied first, then every configured shared path is replaced
//!   with a symlink back into the source.
//!
//! Shared entries that were just copied are removed again and re-linked;
//! the copy-then-shadow overlap is deliberate and not warned about, since
//! reordering would change the observable side effects mid-run.

use crate::config;
use crate::defaults::DEFAULT_CONFIG_FILENAME;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::link;
use log::info;
use std::fs;
use std::path::Path;

/// Run one deploy from `source` to `destination`.
///
/// `config_override` is the explicitly requested configuration file, if
/// any (CLI flag or environment). When it is set and no regular file
/// exists there, the run fails fast with [`Error::ConfigNotFound`] before
/// any filesystem mutation; there is no fallback to the default location.
/// Without an override the configuration is looked up at
/// `<source>/.ddply`, and its absence selects link-only mode.
pub fn run(source: &Path, destination: &Path, config_override: Option<&Path>) -> Result<()> {
    if !filesystem::is_dir(source) {
        return Err(Error::InvalidSource {
            path: source.display().to_string(),
        });
    }

    let (config_path, explicit) = match config_override {
        Some(path) => (path.to_path_buf(), true),
        None => (source.join(DEFAULT_CONFIG_FILENAME), false),
    };

    if explicit && !filesystem::is_file(&config_path) {
        return Err(Error::ConfigNotFound {
            path: config_path.display().to_string(),
        });
    }

    match fs::read_to_string(&config_path) {
        Err(_) => {
            info!("No configuration file found or specified. Continuing with linked deploy");
            link::link_shared(&[String::new()], source, destination)?;
        }
        Ok(raw) => {
            let config = config::parse(&raw)?;
            info!("Shared locations from config: {:?}", config.shared);

            info!("Copying directories...");
            filesystem::copy_dir(source, destination)?;
            link::link_shared(&config.shared, source, destination)?;
        }
    }

    Ok(())
}
