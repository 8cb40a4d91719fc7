//! Installer overlay for the Orange Pi 5 board.
//!
//! An overlay is the board-specific half of an OS install. The generic
//! installer host partitions, formats and mounts the target disk; the
//! overlay tells the host which kernel arguments the board needs and places
//! the board's boot files onto the mounted target.
//!
//! # Architecture
//!
//! ```text
//! installer host
//!     │  get-options / install (YAML on stdin)
//!     ▼
//! adapter ──────────── dispatches to any Describable + Installable
//!     │
//!     ▼
//! board::BoardInstaller
//!     ├── get_options: name + kernel args (constant)
//!     └── install: disk check → mkdir boot/EFI → copy dtb tree
//!                      │
//!                      ▼
//!                  executor::{disk, directories, files}
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use orangepi5_overlay::board::{BoardExtraOptions, BoardInstaller};
//! use orangepi5_overlay::contracts::{Describable, InstallOptions, Installable};
//!
//! let board = BoardInstaller;
//! let options = board.get_options(BoardExtraOptions::default())?;
//! assert_eq!(options.name, "orangepi-5");
//!
//! board.install(InstallOptions {
//!     install_disk: "/dev/mmcblk1".into(),
//!     artifacts_path: "/usr/install/arm64".into(),
//!     mount_prefix: "/mnt/target".into(),
//!     extra_options: BoardExtraOptions::default(),
//! })?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod adapter;
pub mod board;
pub mod contracts;
pub mod executor;

pub use board::{BoardExtraOptions, BoardInstaller};
pub use contracts::{Describable, InstallOptions, Installable, Options, PartitionOptions};
