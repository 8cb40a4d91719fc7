//! Filesystem and device operations performed during an install.
//!
//! These handlers are board-agnostic: a board's install step is a short
//! sequence of calls into them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use orangepi5_overlay::executor::{directories, disk, files};
//! use std::path::Path;
//!
//! disk::check_disk(Path::new("/dev/mmcblk1"))?;
//! let efi = directories::ensure_dir(Path::new("/mnt/target"), "boot/EFI")?;
//! files::copy_tree(Path::new("/artifacts/dtb"), &efi.join("dtb"))?;
//! ```

pub mod directories;
pub mod disk;
pub mod files;
