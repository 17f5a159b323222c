//! Contains the chain config type.

use alloc::string::String;
use alloy_primitives::Address;

use crate::{ChainGenesis, HardForkSchedule, PlasmaConfig, SuperchainLevel};

/// A chain configuration, as read from `configs/<network>/<chain>.yaml`.
///
/// The `superchain` and `chain` fields are not part of the file: they are implied by the
/// directory structure and the file name respectively, and are filled in by the loader.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainConfig {
    /// Chain name (e.g. "Base")
    pub name: String,
    /// Chain ID
    pub chain_id: u64,
    /// Chain public RPC endpoint
    pub public_rpc: String,
    /// Chain sequencer RPC endpoint
    pub sequencer_rpc: String,
    /// Chain explorer HTTP endpoint
    pub explorer: String,
    /// Level of integration with the superchain.
    pub superchain_level: SuperchainLevel,
    /// Time of opt-in to the Superchain.
    /// If set, hardforks scheduled after the superchain time
    /// are inherited from the superchain-wide config.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub superchain_time: Option<u64>,
    /// Chain-specific batch inbox address
    pub batch_inbox_addr: Address,
    /// Chain-specific genesis information
    pub genesis: ChainGenesis,
    /// Hardfork schedule. Values may be replaced by the superchain-wide defaults.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hardforks: HardForkSchedule,
    /// Optional Plasma DA configuration
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub plasma: Option<PlasmaConfig>,
    /// Name of the superchain (network directory) this chain belongs to.
    #[cfg_attr(feature = "serde", serde(skip_deserializing, default))]
    pub superchain: String,
    /// Chain identifier within its superchain, derived from the config file name.
    /// Used to locate the chain's address list and genesis system config.
    #[cfg_attr(feature = "serde", serde(skip_deserializing, default))]
    pub chain: String,
}

impl ChainConfig {
    /// Replaces this chain's hardfork schedule with the result of resolving it against the
    /// superchain-wide `defaults`. See [`HardForkSchedule::resolve`].
    pub fn inherit_hardfork_defaults(&mut self, defaults: &HardForkSchedule) {
        self.hardforks = self.hardforks.resolve(self.superchain_time, defaults);
    }

    /// Returns the file name shared by this chain's sibling artifacts.
    pub fn artifact_file_name(&self) -> String {
        alloc::format!("{}.json", self.chain)
    }
}
