//! Contains the `Superchain` type.

use crate::SuperchainConfig;
use alloc::{string::String, vec::Vec};

/// A loaded superchain: its defaults and the chains discovered in its directory.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Superchain {
    /// Superchain identifier (the network directory name), without capitalization or display
    /// changes.
    pub superchain: String,
    /// Superchain configuration file contents.
    pub config: SuperchainConfig,
    /// Chain IDs of chains that are part of this superchain, in discovery order.
    pub chain_ids: Vec<u64>,
}
