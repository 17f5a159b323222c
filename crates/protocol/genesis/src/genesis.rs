//! Chain genesis information.

use crate::{BlockId, GenesisSystemConfig};
use alloy_primitives::Bytes;

/// Chain genesis information.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainGenesis {
    /// L1 genesis block
    pub l1: BlockId,
    /// L2 genesis block
    pub l2: BlockId,
    /// Timestamp of the L2 genesis block
    pub l2_time: u64,
    /// Extra data for the genesis block
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub extra_data: Option<Bytes>,
    /// Optional system configuration.
    ///
    /// Registry chain configs rarely embed this; the genesis system config is normally a
    /// sibling artifact joined in by chain id.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub system_config: Option<GenesisSystemConfig>,
}
