//! # ddply Library
//!
//! This library provides the core functionality for deploying an
//! application tree: copying a source directory to a destination and
//! symlinking a configurable set of "shared" subpaths from the source back
//! into the destination. It is designed to be used by the `ddply`
//! command-line tool but can also be embedded in other applications that
//! prepare PHP-style applications for containerized deployment.
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the `.ddply` YAML schema, a single
//!   `shared` key listing the relative paths to link rather than copy.
//! - **Filesystem operations (`filesystem`)**: path probes, single-file
//!   copy with permission/ownership preservation, and recursive tree copy
//!   that skips symbolic links.
//! - **Shared linking (`link`)**: removal of existing destination entries
//!   and creation of symlinks back to the absolute source locations.
//! - **Orchestration (`deploy`)**: reads the configuration, decides
//!   between link-only and copy-and-link mode, and sequences the above.
//!
//! ## Execution Flow
//!
//! 1. Resolve the configuration path (explicit override, or `.ddply`
//!    inside the source directory).
//! 2. No config found: **link-only mode**. The destination root becomes a
//!    single symlink to the source root.
//! 3. Config found: **copy-and-link mode**. Copy the whole tree, then
//!    replace each configured shared path with a symlink.
//!
//! All operations are single-threaded and strictly sequential; the first
//! unrecovered failure aborts the run, leaving already-copied files in
//! place.

pub mod config;
pub mod defaults;
pub mod deploy;
pub mod error;
pub mod filesystem;
pub mod link;
pub mod path;
