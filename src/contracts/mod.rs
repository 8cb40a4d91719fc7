//! Contract interfaces shared between the installer host and board overlays.

pub mod overlay;

pub use overlay::{Describable, InstallOptions, Installable, Options, PartitionOptions};
