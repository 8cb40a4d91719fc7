use super::{BoardExtraOptions, DTB_SOURCE_DIR, EFI_DIR, KERNEL_ARGS, NAME};
use crate::contracts::{Describable, InstallOptions, Installable, Options};
use crate::executor::{directories, disk, files};
use anyhow::Result;

/// Orange Pi 5 overlay installer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardInstaller;

impl Describable for BoardInstaller {
    type Extra = BoardExtraOptions;

    fn get_options(&self, _extra: BoardExtraOptions) -> Result<Options> {
        Ok(Options {
            name: NAME.to_string(),
            kernel_args: KERNEL_ARGS.iter().map(|arg| arg.to_string()).collect(),
            partition_options: None,
        })
    }
}

impl Installable for BoardInstaller {
    /// Check the disk, then copy `<artifacts>/dtb` to `<mount>/boot/EFI/dtb`.
    ///
    /// Stops at the first failing step.
    fn install(&self, options: InstallOptions<BoardExtraOptions>) -> Result<()> {
        log::info!("checking install disk {}", options.install_disk.display());
        disk::check_disk(&options.install_disk)?;

        let efi = directories::ensure_dir(&options.mount_prefix, EFI_DIR)?;

        let src = options.artifacts_path.join(DTB_SOURCE_DIR);
        let dst = efi.join(DTB_SOURCE_DIR);
        log::info!("copying {} -> {}", src.display(), dst.display());
        files::copy_tree(&src, &dst)?;

        log::info!("{NAME} install complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Layout {
        _temp: TempDir,
        disk: PathBuf,
        artifacts: PathBuf,
        mount: PathBuf,
    }

    impl Layout {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let disk = temp.path().join("disk.img");
            let artifacts = temp.path().join("artifacts");
            let mount = temp.path().join("mnt");
            fs::write(&disk, vec![0u8; 1024]).unwrap();
            fs::create_dir_all(artifacts.join("dtb/rockchip")).unwrap();
            fs::create_dir_all(&mount).unwrap();
            fs::write(
                artifacts.join("dtb/rockchip/rk3588s-orangepi-5.dtb"),
                b"\xd0\x0d\xfe\xed-dtb",
            )
            .unwrap();
            Self {
                _temp: temp,
                disk,
                artifacts,
                mount,
            }
        }

        fn options(&self) -> InstallOptions<BoardExtraOptions> {
            InstallOptions {
                install_disk: self.disk.clone(),
                artifacts_path: self.artifacts.clone(),
                mount_prefix: self.mount.clone(),
                extra_options: BoardExtraOptions::default(),
            }
        }
    }

    #[test]
    fn test_get_options_reports_board() {
        let options = BoardInstaller.get_options(BoardExtraOptions::default()).unwrap();

        assert_eq!(options.name, "orangepi-5");
        assert_eq!(
            options.kernel_args,
            vec![
                "console=tty1",
                "console=ttyS2:1500000",
                "sysctl.kernel.kexec_load_disabled=1",
                "talos.dashboard.disabled=1",
            ]
        );
        assert!(options.partition_options.is_none());
    }

    #[test]
    fn test_get_options_is_deterministic() {
        let first = BoardInstaller.get_options(BoardExtraOptions::default()).unwrap();
        let second = BoardInstaller.get_options(BoardExtraOptions {}).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_install_copies_dtbs() {
        let layout = Layout::new();

        BoardInstaller.install(layout.options()).unwrap();

        let copied = layout
            .mount
            .join("boot/EFI/dtb/rockchip/rk3588s-orangepi-5.dtb");
        assert_eq!(fs::read(copied).unwrap(), b"\xd0\x0d\xfe\xed-dtb");
    }

    #[test]
    fn test_install_releases_disk() {
        let layout = Layout::new();
        let disk = layout.disk.canonicalize().unwrap();

        BoardInstaller.install(layout.options()).unwrap();

        assert_eq!(disk::open_fds_to(&disk), 0);
    }

    #[test]
    fn test_install_missing_disk_writes_nothing() {
        let layout = Layout::new();
        fs::remove_file(&layout.disk).unwrap();

        let err = BoardInstaller.install(layout.options()).unwrap_err();

        assert!(format!("{err:#}").contains("disk.img"));
        assert_eq!(fs::read_dir(&layout.mount).unwrap().count(), 0);
    }

    #[test]
    fn test_install_missing_dtb_stops_after_efi() {
        let layout = Layout::new();
        fs::remove_dir_all(layout.artifacts.join("dtb")).unwrap();

        assert!(BoardInstaller.install(layout.options()).is_err());

        assert!(layout.mount.join("boot/EFI").is_dir());
        assert!(!layout.mount.join("boot/EFI/dtb").exists());
    }
}
