//! Path manipulation utilities for ddply

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path, resolving `.` and `..` segments without
/// touching the filesystem.
///
/// Rules:
/// - `.` segments are dropped.
/// - A `..` segment removes the preceding normal segment when there is one;
///   `..` segments at the start of a relative path are kept, and `..`
///   directly under the root collapses into the root (`/..` == `/`).
/// - An empty input normalizes to `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut stack: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match stack.last().copied() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                Some(Component::RootDir) => {}
                _ => stack.push(component),
            },
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return PathBuf::from(".");
    }

    let mut cleaned = PathBuf::new();
    for component in &stack {
        cleaned.push(component.as_os_str());
    }
    cleaned
}

/// Join a shared entry onto a root path.
///
/// The empty entry designates the root itself, so `join_entry(root, "")`
/// is the cleaned root rather than a path with a trailing separator. The
/// result is always lexically normalized.
pub fn join_entry(root: &Path, entry: &str) -> PathBuf {
    if entry.is_empty() {
        clean(root)
    } else {
        clean(&root.join(entry))
    }
}
