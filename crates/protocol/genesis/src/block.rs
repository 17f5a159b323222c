//! Block identifier.

use alloy_primitives::{B256, U256};

/// Identifies a block by hash and number.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockId {
    /// Block hash
    pub hash: B256,
    /// Block number
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "superchain_serde::deserialize_quantity")
    )]
    pub number: U256,
}
