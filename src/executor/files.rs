//! File placement onto the mounted target: single files and whole trees.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copy one regular file to `dst`, creating `dst`'s parent directories first.
///
/// Permissions follow whatever `fs::copy` carries over; contents are not
/// checksummed.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::copy(src, dst).with_context(|| {
        format!(
            "Failed to copy file: {} -> {}",
            src.display(),
            dst.display()
        )
    })?;
    Ok(())
}

/// Recursively copy the directory `src` to `dst`, preserving structure.
///
/// Regular files are copied byte-for-byte, empty directories are kept and
/// symlinks are recreated rather than followed. Existing destination files
/// are overwritten, so repeating the copy yields the same tree.
///
/// Nothing is created under `dst` when `src` is missing. A failure midway
/// leaves whatever was already copied in place.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_dir() {
        bail!("directory not found: {}", src.display());
    }

    for entry in WalkDir::new(src).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("{} escaped {}", entry.path().display(), src.display()))?;
        let target = dst.join(rel);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else if file_type.is_symlink() {
            let link = fs::read_link(entry.path())
                .with_context(|| format!("Failed to read symlink: {}", entry.path().display()))?;
            if target.is_symlink() || target.exists() {
                fs::remove_file(&target)
                    .with_context(|| format!("Failed to replace: {}", target.display()))?;
            }
            std::os::unix::fs::symlink(&link, &target)
                .with_context(|| format!("Failed to create symlink: {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy file: {} -> {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }

    Ok(())
}
