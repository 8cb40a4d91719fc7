//! Orange Pi 5 (RK3588S) board definition.
//!
//! The board has no extra options. Its kernel arguments put the console on
//! both the display and the debug UART, disable kexec reloads and turn off
//! the on-device dashboard. Installing copies the device-tree blobs into the
//! EFI partition, where the bootloader picks them up.

mod installer;

use serde::{Deserialize, Serialize};

pub use installer::BoardInstaller;

/// Board identifier reported to the host.
pub const NAME: &str = "orangepi-5";

/// Kernel command-line tokens, in the order the kernel should see them.
pub const KERNEL_ARGS: &[&str] = &[
    "console=tty1",
    "console=ttyS2:1500000",
    "sysctl.kernel.kexec_load_disabled=1",
    "talos.dashboard.disabled=1",
];

/// Directory under the artifacts path holding the device-tree blobs.
pub const DTB_SOURCE_DIR: &str = "dtb";

/// EFI directory under the mount prefix.
pub const EFI_DIR: &str = "boot/EFI";

/// Board-specific install options. Empty for this board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardExtraOptions {}
