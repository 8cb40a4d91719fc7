//! Directory preparation under the target mount.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Create `root/path` and any missing intermediate directories.
///
/// Returns the full path so callers can keep building on it.
pub fn ensure_dir(root: &Path, path: &str) -> Result<PathBuf> {
    let full_path = root.join(path);
    fs::create_dir_all(&full_path)
        .with_context(|| format!("Failed to create directory: {}", full_path.display()))?;
    Ok(full_path)
}
