//! Genesis system configuration.

use alloy_primitives::{Address, B256};

/// The system configuration a chain started with, as recorded in
/// `extra/genesis-system-configs/<network>/<chain>.json`.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GenesisSystemConfig {
    /// Batcher address
    pub batcher_addr: Address,
    /// Fee overhead value
    pub overhead: B256,
    /// Fee scalar value
    pub scalar: B256,
    /// Gas limit value
    pub gas_limit: u64,
    /// Base fee scalar value (Ecotone)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub base_fee_scalar: Option<u64>,
    /// Blob base fee scalar value (Ecotone)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub blob_base_fee_scalar: Option<u64>,
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_genesis_system_config_deserialize() {
        let raw = r#"
        {
            "batcherAddr": "0x6887246668a3b87F54DeB3b94Ba47a6f63F32985",
            "overhead": "0x00000000000000000000000000000000000000000000000000000000000000bc",
            "scalar": "0x00000000000000000000000000000000000000000000000000000000000a6fe0",
            "gasLimit": 30000000
        }
        "#;
        let config: GenesisSystemConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.batcher_addr, address!("6887246668a3b87F54DeB3b94Ba47a6f63F32985"));
        assert_eq!(
            config.overhead,
            b256!("00000000000000000000000000000000000000000000000000000000000000bc")
        );
        assert_eq!(config.gas_limit, 30_000_000);
        assert_eq!(config.base_fee_scalar, None);
        assert_eq!(config.blob_base_fee_scalar, None);
    }

    #[test]
    fn test_genesis_system_config_missing_gas_limit() {
        let raw = r#"
        {
            "batcherAddr": "0x6887246668a3b87F54DeB3b94Ba47a6f63F32985",
            "overhead": "0x00000000000000000000000000000000000000000000000000000000000000bc",
            "scalar": "0x00000000000000000000000000000000000000000000000000000000000a6fe0"
        }
        "#;
        let err = serde_json::from_str::<GenesisSystemConfig>(raw).unwrap_err();
        assert!(err.to_string().contains("gasLimit"));
    }
}
