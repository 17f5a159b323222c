//! Contains the Plasma config type.

use alloy_primitives::Address;

/// Plasma (alternative data availability) configuration.
///
/// Only present for chains that post data to an external DA layer.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlasmaConfig {
    /// Plasma DA challenge address
    #[cfg_attr(feature = "serde", serde(default, alias = "da_challenge_contract_address"))]
    pub da_challenge_address: Option<Address>,
    /// Plasma DA challenge window time (in seconds)
    #[cfg_attr(feature = "serde", serde(default))]
    pub da_challenge_window: Option<u64>,
    /// Plasma DA resolution window time (in seconds)
    #[cfg_attr(feature = "serde", serde(default))]
    pub da_resolve_window: Option<u64>,
}
