//! Contract implementation maps and their merge policy.

use alloc::{collections::BTreeMap, string::String};
use alloy_primitives::Address;

/// Implementation addresses of one contract type, keyed by semver version tag.
pub type VersionedAddresses = BTreeMap<String, Address>;

/// Implementation addresses for the L1 contracts of a network.
///
/// The core contracts always have a (possibly empty) mapping. The fault proof contracts are
/// tracked as [`Option`]s that are [`Some`] only when the mapping holds at least one entry, so
/// "absent" and "present but empty" cannot be confused.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractImplementations {
    /// L1CrossDomainMessenger implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub l1_cross_domain_messenger: VersionedAddresses,
    /// L1ERC721Bridge implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub l1_erc721_bridge: VersionedAddresses,
    /// L1StandardBridge implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub l1_standard_bridge: VersionedAddresses,
    /// L2OutputOracle implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub l2_output_oracle: VersionedAddresses,
    /// OptimismMintableERC20Factory implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub optimism_mintable_erc20_factory: VersionedAddresses,
    /// OptimismPortal implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub optimism_portal: VersionedAddresses,
    /// SystemConfig implementations
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "superchain_serde::deserialize_versioned_addresses")
    )]
    pub system_config: VersionedAddresses,

    // Fault Proof contracts
    /// AnchorStateRegistry implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub anchor_state_registry: Option<VersionedAddresses>,
    /// DelayedWETH implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub delayed_weth: Option<VersionedAddresses>,
    /// DisputeGameFactory implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub dispute_game_factory: Option<VersionedAddresses>,
    /// FaultDisputeGame implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub fault_dispute_game: Option<VersionedAddresses>,
    /// MIPS implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub mips: Option<VersionedAddresses>,
    /// PermissionedDisputeGame implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub permissioned_dispute_game: Option<VersionedAddresses>,
    /// PreimageOracle implementations
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_versioned_addresses",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub preimage_oracle: Option<VersionedAddresses>,
}

/// Unions `overrides` into `base`; entries of `overrides` win on a shared version tag.
fn union(mut base: VersionedAddresses, overrides: VersionedAddresses) -> VersionedAddresses {
    base.extend(overrides);
    base
}

/// Unions two optional categories, treating an absent side as empty. The result is only
/// present if it holds at least one entry.
fn union_optional(
    base: Option<VersionedAddresses>,
    overrides: Option<VersionedAddresses>,
) -> Option<VersionedAddresses> {
    let merged = union(base.unwrap_or_default(), overrides.unwrap_or_default());
    (!merged.is_empty()).then_some(merged)
}

impl ContractImplementations {
    /// Merges a network-specific override set on top of `self` (the global set).
    ///
    /// Every category becomes the union of both mappings, with `overrides` taking precedence
    /// for version tags present in both. The merge is not commutative: always call it on the
    /// global set with the network set as the argument.
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            l1_cross_domain_messenger: union(
                self.l1_cross_domain_messenger,
                overrides.l1_cross_domain_messenger,
            ),
            l1_erc721_bridge: union(self.l1_erc721_bridge, overrides.l1_erc721_bridge),
            l1_standard_bridge: union(self.l1_standard_bridge, overrides.l1_standard_bridge),
            l2_output_oracle: union(self.l2_output_oracle, overrides.l2_output_oracle),
            optimism_mintable_erc20_factory: union(
                self.optimism_mintable_erc20_factory,
                overrides.optimism_mintable_erc20_factory,
            ),
            optimism_portal: union(self.optimism_portal, overrides.optimism_portal),
            system_config: union(self.system_config, overrides.system_config),
            anchor_state_registry: union_optional(
                self.anchor_state_registry,
                overrides.anchor_state_registry,
            ),
            delayed_weth: union_optional(self.delayed_weth, overrides.delayed_weth),
            dispute_game_factory: union_optional(
                self.dispute_game_factory,
                overrides.dispute_game_factory,
            ),
            fault_dispute_game: union_optional(
                self.fault_dispute_game,
                overrides.fault_dispute_game,
            ),
            mips: union_optional(self.mips, overrides.mips),
            permissioned_dispute_game: union_optional(
                self.permissioned_dispute_game,
                overrides.permissioned_dispute_game,
            ),
            preimage_oracle: union_optional(self.preimage_oracle, overrides.preimage_oracle),
        }
    }

    /// Returns the names of the fault proof categories that are present.
    pub fn fault_proof_categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("anchor_state_registry", &self.anchor_state_registry),
            ("delayed_weth", &self.delayed_weth),
            ("dispute_game_factory", &self.dispute_game_factory),
            ("fault_dispute_game", &self.fault_dispute_game),
            ("mips", &self.mips),
            ("permissioned_dispute_game", &self.permissioned_dispute_game),
            ("preimage_oracle", &self.preimage_oracle),
        ]
        .into_iter()
        .filter_map(|(name, category)| category.as_ref().map(|_| name))
    }
}
