//! Shared-path linking: replaces destination entries with symbolic links
//! pointing back into the source tree, so shared locations (uploads,
//! caches, generated assets) are not duplicated per deployment.

use crate::error::{Error, Result};
use crate::filesystem;
use crate::path;
use log::{debug, info};
use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::Path;

/// Outcome of linking a single shared entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The destination entry is now a symlink to the absolute source path.
    Linked,
    /// The source path does not exist as a file or directory; the
    /// destination entry was removed and no link was created.
    SkippedMissing,
}

/// Resolve each shared entry to its absolute source location and link it
/// into the destination.
///
/// Entries are processed sequentially in input order. For each entry any
/// existing file, directory, or symlink at the destination path is removed
/// first; then, if the resolved source currently exists as a regular file
/// or directory, a symlink to it is created. A missing source is not an
/// error: the entry ends up absent from the destination.
///
/// The first resolution or removal failure aborts the remaining entries.
pub fn link_shared(
    entries: &[String],
    source: &Path,
    destination: &Path,
) -> Result<Vec<LinkOutcome>> {
    entries
        .iter()
        .map(|entry| link_entry(entry, source, destination))
        .collect()
}

fn link_entry(entry: &str, source: &Path, destination: &Path) -> Result<LinkOutcome> {
    let source_path = path::join_entry(source, entry);
    let destination_path = path::join_entry(destination, entry);

    info!("Linking {} as {}", entry, destination_path.display());

    // Lexical resolution against the working directory; the path does not
    // have to exist yet. Existence is checked after removal, below.
    let absolute_source = std::path::absolute(&source_path).map_err(|e| Error::Resolution {
        path: source_path.display().to_string(),
        message: e.to_string(),
    })?;

    remove_existing(&destination_path).map_err(|e| Error::Removal {
        path: destination_path.display().to_string(),
        source: e,
    })?;

    if filesystem::is_file(&absolute_source) || filesystem::is_dir(&absolute_source) {
        symlink(&absolute_source, &destination_path)?;
        Ok(LinkOutcome::Linked)
    } else {
        debug!(
            "Shared source {} does not exist, leaving {} absent",
            absolute_source.display(),
            destination_path.display()
        );
        Ok(LinkOutcome::SkippedMissing)
    }
}

/// Remove whatever currently sits at `path`: a regular file, a symlink
/// (without following it), or a directory tree. A missing path is fine.
fn remove_existing(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
