//! Overlay contract between the installer host and a board plugin.
//!
//! The host asks a board two things: describe yourself ([`Describable`])
//! and install your boot files onto the mounted target ([`Installable`]).
//! Both take the board's own extra-options type so every board shares the
//! same contract shape even when, like the Orange Pi 5, it has no options.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Board metadata reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Stable lowercase board identifier (e.g. `orangepi-5`).
    pub name: String,

    /// Kernel command-line tokens. Order matters: later tokens win.
    #[serde(default)]
    pub kernel_args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_options: Option<PartitionOptions>,
}

/// Partition layout hints for boards that reserve space before the
/// first partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionOptions {
    /// Offset of the first partition, in bytes.
    pub offset: u64,
}

/// Resolved parameters for one install call.
///
/// The host owns mounting: `mount_prefix` is already mounted before
/// [`Installable::install`] runs and is unmounted after it returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallOptions<T> {
    /// Block device or disk image being installed to.
    pub install_disk: PathBuf,

    /// Directory of pre-staged build outputs.
    pub artifacts_path: PathBuf,

    /// Root of the mounted target filesystem.
    pub mount_prefix: PathBuf,

    #[serde(default)]
    pub extra_options: T,
}

/// Produces board metadata from the board's extra options.
pub trait Describable {
    /// Board-specific options. Must be constructible with no fields set.
    type Extra: Default;

    fn get_options(&self, extra: Self::Extra) -> Result<Options>;
}

/// Performs the board's install step on the mounted target.
pub trait Installable: Describable {
    fn install(&self, options: InstallOptions<Self::Extra>) -> Result<()>;
}
