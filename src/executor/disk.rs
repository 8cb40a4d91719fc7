//! Target disk liveness check.
//!
//! The overlay never writes to the raw device; files go through the mounted
//! filesystem. Opening the disk read/write and syncing it only confirms the
//! device is still present and writable before any copying starts.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

/// Read/write handle on the install disk, closed when dropped.
#[derive(Debug)]
pub struct DiskHandle {
    file: File,
    path: PathBuf,
}

impl DiskHandle {
    /// Open `path` with `O_RDWR | O_CLOEXEC`. The disk must already exist.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_CLOEXEC)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Flush the device, surfacing I/O errors from a stale or detached disk.
    pub fn sync(&self) -> Result<()> {
        self.file
            .sync_all()
            .with_context(|| format!("failed to sync {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DiskHandle {
    fn drop(&mut self) {
        log::debug!("closing {}", self.path.display());
    }
}

/// Open, sync and close the install disk.
pub fn check_disk(path: &Path) -> Result<()> {
    let disk = DiskHandle::open(path)?;
    disk.sync()?;
    log::debug!("{} is writable", disk.path().display());
    Ok(())
}

#[cfg(test)]
pub(crate) fn open_fds_to(path: &Path) -> usize {
    std::fs::read_dir("/proc/self/fd")
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter_map(|e| std::fs::read_link(e.path()).ok())
                .filter(|target| target == path)
                .count()
        })
        .unwrap_or(0)
}
