//! The fixed directory layout of a registry tree.

use std::path::{Path, PathBuf};

/// Directory holding one sub-directory per network.
pub const CONFIGS_DIR: &str = "configs";
/// Directory holding per-chain sibling artifacts.
pub const EXTRA_DIR: &str = "extra";
/// Sub-directory of [`EXTRA_DIR`] holding address lists.
pub const ADDRESSES_DIR: &str = "addresses";
/// Sub-directory of [`EXTRA_DIR`] holding genesis system configs.
pub const GENESIS_SYSTEM_CONFIGS_DIR: &str = "genesis-system-configs";
/// Directory holding contract implementation maps.
pub const IMPLEMENTATIONS_DIR: &str = "implementations";
/// Sub-directory of [`IMPLEMENTATIONS_DIR`] holding per-network overrides.
pub const NETWORK_IMPLEMENTATIONS_DIR: &str = "networks";
/// The global implementations file name.
pub const GLOBAL_IMPLEMENTATIONS_FILE: &str = "implementations.yaml";
/// The network defaults file name.
pub const SUPERCHAIN_CONFIG_FILE: &str = "superchain.yaml";
/// Semver metadata; not loaded.
pub const SEMVER_FILE: &str = "semver.yaml";

/// Resolves artifact paths relative to a registry root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryLayout {
    root: PathBuf,
}

impl RegistryLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The registry root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `configs/`
    pub fn configs_dir(&self) -> PathBuf {
        self.root.join(CONFIGS_DIR)
    }

    /// `configs/<network>/`
    pub fn network_dir(&self, network: &str) -> PathBuf {
        self.configs_dir().join(network)
    }

    /// `configs/<network>/superchain.yaml`
    pub fn superchain_config(&self, network: &str) -> PathBuf {
        self.network_dir(network).join(SUPERCHAIN_CONFIG_FILE)
    }

    /// `extra/addresses/<network>/<chain>.json`
    pub fn address_list(&self, network: &str, chain: &str) -> PathBuf {
        self.root.join(EXTRA_DIR).join(ADDRESSES_DIR).join(network).join(format!("{chain}.json"))
    }

    /// `extra/genesis-system-configs/<network>/<chain>.json`
    pub fn genesis_system_config(&self, network: &str, chain: &str) -> PathBuf {
        self.root
            .join(EXTRA_DIR)
            .join(GENESIS_SYSTEM_CONFIGS_DIR)
            .join(network)
            .join(format!("{chain}.json"))
    }

    /// `implementations/implementations.yaml`
    pub fn global_implementations(&self) -> PathBuf {
        self.root.join(IMPLEMENTATIONS_DIR).join(GLOBAL_IMPLEMENTATIONS_FILE)
    }

    /// `implementations/networks/<network>.yaml`
    pub fn network_implementations(&self, network: &str) -> PathBuf {
        self.root
            .join(IMPLEMENTATIONS_DIR)
            .join(NETWORK_IMPLEMENTATIONS_DIR)
            .join(format!("{network}.yaml"))
    }
}

/// Returns the chain identifier for a file name inside a network directory, or [`None`] if
/// the file is not a chain config.
///
/// The identifier is the file name with its last extension stripped.
pub(crate) fn chain_slug(file_name: &str) -> Option<&str> {
    if file_name == SUPERCHAIN_CONFIG_FILE || file_name == SEMVER_FILE || file_name.starts_with('.')
    {
        return None;
    }
    let slug = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
    (!slug.is_empty()).then_some(slug)
}
