//! Contains the `SuperchainConfig` type.

use crate::{HardForkSchedule, SuperchainL1Info};
use alloc::string::String;
use alloy_primitives::Address;

/// A superchain configuration file format, read from `configs/<network>/superchain.yaml`.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperchainConfig {
    /// Superchain name (e.g. "Mainnet")
    pub name: String,
    /// Superchain L1 anchor information
    pub l1: SuperchainL1Info,
    /// Optional address for the superchain-wide default protocol versions contract.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_address",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub protocol_versions_addr: Option<Address>,
    /// Optional address for the superchain-wide default superchain config contract.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "superchain_serde::deserialize_optional_address",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub superchain_config_addr: Option<Address>,
    /// Default hardfork timestamps. Individual chains may override these.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hardfork_defaults: HardForkSchedule,
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_superchain_config_deserialize() {
        let raw = r#"
name: Mainnet
l1:
  chain_id: 1
  public_rpc: https://ethereum-rpc.publicnode.com
  explorer: https://etherscan.io
protocol_versions_addr: "0x8062AbC286f5e7D9428a0Ccb9AbD71e50d93b935"
superchain_config_addr: ""
canyon_time: 1704992401
delta_time: 1708560000
"#;
        let config: SuperchainConfig = serde_yaml::from_str(raw).unwrap();
        assert_eq!(config.name, "Mainnet");
        assert_eq!(config.l1.chain_id, 1);
        assert_eq!(config.l1.explorer, "https://etherscan.io");
        assert_eq!(
            config.protocol_versions_addr,
            Some(address!("8062AbC286f5e7D9428a0Ccb9AbD71e50d93b935"))
        );
        assert_eq!(config.superchain_config_addr, None);
        assert_eq!(config.hardfork_defaults.canyon_time, Some(1704992401));
        assert_eq!(config.hardfork_defaults.delta_time, Some(1708560000));
        assert_eq!(config.hardfork_defaults.ecotone_time, None);
    }

    #[test]
    fn test_superchain_config_missing_l1() {
        let raw = "name: Mainnet\n";
        let err = serde_yaml::from_str::<SuperchainConfig>(raw).unwrap_err();
        assert!(err.to_string().contains("l1"));
    }
}
