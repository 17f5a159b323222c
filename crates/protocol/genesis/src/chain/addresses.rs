//! Address Types

use alloy_primitives::Address;

/// The set of network-specific contracts for a given chain.
///
/// The fault proof addresses are optional: a chain only lists them once the corresponding
/// contracts are deployed, so presence carries meaning and is never inferred.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct AddressList {
    /// The address manager
    pub address_manager: Address,
    /// L1 Cross Domain Messenger proxy address
    pub l1_cross_domain_messenger_proxy: Address,
    /// L1 ERC721 Bridge proxy address
    #[cfg_attr(
        feature = "serde",
        serde(rename = "L1ERC721BridgeProxy", alias = "L1Erc721BridgeProxy")
    )]
    pub l1_erc721_bridge_proxy: Address,
    /// L1 Standard Bridge proxy address
    pub l1_standard_bridge_proxy: Address,
    /// Optimism Mintable ERC20 Factory Proxy address
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "OptimismMintableERC20FactoryProxy",
            alias = "OptimismMintableErc20FactoryProxy"
        )
    )]
    pub optimism_mintable_erc20_factory_proxy: Address,
    /// Optimism Portal Proxy address
    pub optimism_portal_proxy: Address,
    /// System Config Proxy address
    pub system_config_proxy: Address,
    /// System Config Owner address
    pub system_config_owner: Address,
    /// Proxy Admin address
    pub proxy_admin: Address,
    /// Proxy Admin Owner address
    pub proxy_admin_owner: Address,
    /// Guardian address
    pub guardian: Address,

    // Fault Proof Contract Addresses
    /// Challenger address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub challenger: Option<Address>,
    /// L2 Output Oracle Proxy address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub l2_output_oracle_proxy: Option<Address>,
    /// Anchor State Registry Proxy address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub anchor_state_registry_proxy: Option<Address>,
    /// Delayed WETH Proxy address
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            rename = "DelayedWETHProxy",
            alias = "DelayedWethProxy",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub delayed_weth_proxy: Option<Address>,
    /// Dispute Game Factory Proxy address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dispute_game_factory_proxy: Option<Address>,
    /// Fault Dispute Game address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fault_dispute_game: Option<Address>,
    /// MIPS address
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "MIPS", alias = "Mips", skip_serializing_if = "Option::is_none")
    )]
    pub mips: Option<Address>,
    /// Permissioned Dispute Game address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub permissioned_dispute_game: Option<Address>,
    /// Preimage Oracle address
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub preimage_oracle: Option<Address>,
}

impl AddressList {
    /// Returns `true` if any fault proof contract is listed for this chain.
    pub const fn has_fault_proofs(&self) -> bool {
        self.anchor_state_registry_proxy.is_some()
            || self.dispute_game_factory_proxy.is_some()
            || self.fault_dispute_game.is_some()
            || self.permissioned_dispute_game.is_some()
    }
}
