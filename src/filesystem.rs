//! Filesystem probes and the copy half of a deploy: single-file copy with
//! metadata preservation, and recursive tree copy.

use crate::error::{Error, Result};
use crate::path;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::os::unix::fs::{chown, MetadataExt, PermissionsExt};
use std::path::Path;

/// Outcome of a tree copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The tree was copied to the destination.
    Copied,
    /// The destination already exists as a symlink; the copy was skipped
    /// and the link left untouched. This is a success, not an error.
    SkippedSymlink,
}

/// Returns true iff the path exists and resolves (following symlinks) to a
/// directory. Any stat failure yields false; this never errors.
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Returns true iff the path exists and resolves (following symlinks) to a
/// regular file. Any stat failure yields false; this never errors.
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Copy the contents of the file named `src` to the file named `dst`.
///
/// The destination is created if it does not already exist and truncated if
/// it does. The copied data is synced to stable storage before the
/// permission bits and owner/group are carried over from the source; the
/// copy is not complete until the sync succeeds.
///
/// On failure the destination may be left truncated or with incorrect
/// metadata; a partial copy is unusable and the caller must treat it as
/// such.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let mut reader = fs::File::open(src)?;
    let mut writer = fs::File::create(dst)?;

    debug!("  name: {}", dst.display());

    io::copy(&mut reader, &mut writer)?;
    writer.sync_all()?;

    let metadata = fs::metadata(src)?;
    let mode = metadata.mode() & 0o7777;
    fs::set_permissions(dst, fs::Permissions::from_mode(mode))?;
    debug!("    mode: {:o}", mode);

    chown(dst, Some(metadata.uid()), Some(metadata.gid()))?;
    debug!("    owner: {}.{}", metadata.uid(), metadata.gid());

    Ok(())
}

/// Recursively copy a directory tree, preserving permissions and ownership.
///
/// The source must exist and be a directory. If the destination already
/// exists as a symlink the copy of that subtree is skipped and the link
/// left untouched; at the top level this is reported as
/// [`CopyOutcome::SkippedSymlink`]. The check applies at every recursion
/// level, so a redeploy never writes through destination entries that an
/// earlier run replaced with shared links.
///
/// The walk is depth-first pre-order: each directory is created (with the
/// source's permission bits and owner/group) before its contents are
/// visited. Symbolic links among the entries are skipped entirely, neither
/// copied nor descended into.
///
/// The first failure at any level aborts the whole operation; entries
/// already copied remain on disk. There is no rollback.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<CopyOutcome> {
    let src = path::clean(src);
    let dst = path::clean(dst);
    copy_dir_inner(&src, &dst)
}

fn copy_dir_inner(src: &Path, dst: &Path) -> Result<CopyOutcome> {
    let src_metadata = fs::metadata(src)?;
    if !src_metadata.is_dir() {
        warn!("Source directory given {} is not a directory", src.display());
        return Err(Error::InvalidSource {
            path: src.display().to_string(),
        });
    }

    match fs::symlink_metadata(dst) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            info!("Destination directory {} is a symlink", dst.display());
            return Ok(CopyOutcome::SkippedSymlink);
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    create_dir_exact(dst, &src_metadata)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_inner(&src_path, &dst_path)?;
        } else if file_type.is_symlink() {
            debug!("Skipping symlink {}", src_path.display());
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }

    Ok(CopyOutcome::Copied)
}

/// Create a directory (and any missing ancestors) carrying the source
/// directory's exact metadata. The directory is created and then chmodded
/// so the source mode bits land verbatim, regardless of the process umask.
fn create_dir_exact(dst: &Path, src_metadata: &fs::Metadata) -> Result<()> {
    fs::create_dir_all(dst)?;
    fs::set_permissions(dst, fs::Permissions::from_mode(src_metadata.mode() & 0o7777))?;
    chown(dst, Some(src_metadata.uid()), Some(src_metadata.gid()))?;
    Ok(())
}
