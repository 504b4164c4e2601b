//! Host storage inspection
//!
//! Reads the containers `storage.conf` files to determine the active storage
//! driver, and locates the optional `fuse-overlayfs` helper binary on PATH.
//! Both answers feed decisions made elsewhere (e.g. whether a build should
//! mount an overlay); nothing here executes a container operation.
//!
//! All failures are absorbed: a missing file, an unreadable file, or a file
//! that does not parse simply contributes no driver value.

use crate::logging::Logger;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Name of the helper binary podman uses for rootless overlay storage.
pub const FUSE_OVERLAYFS: &str = "fuse-overlayfs";

/// System-wide storage configuration file.
pub const SYSTEM_STORAGE_CONF: &str = "/etc/containers/storage.conf";

/// Top-level shape of storage.conf. Only the driver key matters here;
/// everything else in the file is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConf {
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSection {
    pub driver: Option<String>,
}

/// Ordered candidate paths for storage.conf: the system file first, then the
/// per-user file under the given XDG config home. Later paths override
/// earlier ones when both define a driver.
///
/// `xdg_config_home` is the caller-resolved value of `$XDG_CONFIG_HOME`;
/// when `None`, `$HOME/.config` is used.
pub fn storage_conf_paths(xdg_config_home: Option<PathBuf>) -> Vec<PathBuf> {
    let config_home = xdg_config_home
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_default();

    vec![
        PathBuf::from(SYSTEM_STORAGE_CONF),
        config_home.join("containers").join("storage.conf"),
    ]
}

/// Extracts `storage.driver` from one file's contents. Malformed TOML or a
/// missing key both yield `None`.
pub fn parse_storage_driver(contents: &str) -> Option<String> {
    let conf: StorageConf = toml::from_str(contents).ok()?;
    conf.storage.driver
}

/// Inspects local host state relevant to storage decisions.
pub struct HostInspector {
    logger: Logger,
}

impl HostInspector {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Reads each path in order and returns the configured storage driver.
    /// The last file that defines `storage.driver` wins. Returns an empty
    /// string when no file defines it.
    pub fn find_storage_driver(&self, paths: &[PathBuf]) -> String {
        let mut storage_driver = String::new();
        for path in paths {
            self.logger
                .debug(&format!("Checking if the storage file exists at {}", path.display()));
            match std::fs::read_to_string(path) {
                Ok(contents) => {
                    self.logger
                        .debug(&format!("Storage file exists at {}", path.display()));
                    if let Some(driver) = parse_storage_driver(&contents) {
                        storage_driver = driver;
                    }
                }
                Err(e) => {
                    self.logger
                        .debug(&format!("Skipping {}: {}", path.display(), e));
                }
            }
        }
        storage_driver
    }

    /// Returns true if the configured storage driver is `overlay`.
    pub fn is_storage_driver_overlay(&self, paths: &[PathBuf]) -> bool {
        self.find_storage_driver(paths) == "overlay"
    }

    /// Locates `fuse-overlayfs` on the process PATH. Absent is not an error.
    pub fn find_fuse_overlayfs(&self) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        let found = find_in_path(FUSE_OVERLAYFS, &path_var);
        match &found {
            Some(path) => self
                .logger
                .debug(&format!("Found {} at {}", FUSE_OVERLAYFS, path.display())),
            None => self
                .logger
                .debug(&format!("{} not found on PATH", FUSE_OVERLAYFS)),
        }
        found
    }
}

/// Scans the entries of a PATH-style variable in order for a file with the
/// given name.
pub fn find_in_path(binary: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
