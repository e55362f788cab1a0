//! Boot loader entries, OS profiles and boot parameters.
//!
//! The inventory is read from a JSON document holding a list of profiles and
//! a list of entries. Entries refer to their profile by `os_id`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

const SAMPLE: &str = include_str!("../data/sample.json");

/// Kernel version and root file system settings of one boot entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootParams {
    pub version: String,
    pub root_device: String,
    #[serde(default)]
    pub lvm_root_lv: Option<String>,
    #[serde(default)]
    pub btrfs_subvol_path: Option<String>,
    #[serde(default)]
    pub btrfs_subvol_id: Option<i64>,
}

/// Templates shared by the boot entries of one operating system release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsProfile {
    pub os_id: String,
    pub name: String,
    pub short_name: String,
    pub version: String,
    pub version_id: String,
    pub uname_pattern: String,
    pub kernel_pattern: String,
    pub initramfs_pattern: String,
    pub root_opts_lvm2: String,
    pub root_opts_btrfs: String,
    pub options: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootEntry {
    pub boot_id: String,
    pub title: String,
    pub options: String,
    pub linux: String,
    pub initrd: String,
    pub machine_id: String,
    pub os_id: String,
    pub params: BootParams,
}

/// All profiles and entries known to the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub profiles: Vec<OsProfile>,
    #[serde(default)]
    pub entries: Vec<BootEntry>,
}

impl Inventory {
    /// The inventory bundled with the binary.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE).context("bundled sample inventory is invalid")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let inventory: Inventory = serde_json::from_str(text)?;
        debug!(
            "Loaded {} profiles and {} entries",
            inventory.profiles.len(),
            inventory.entries.len()
        );
        Ok(inventory)
    }

    /// Reads an inventory document from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Looks up the profile an entry refers to.
    pub fn profile(&self, os_id: &str) -> Option<&OsProfile> {
        self.profiles.iter().find(|p| p.os_id == os_id)
    }
}
