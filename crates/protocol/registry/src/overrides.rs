//! Environment-derived L1 RPC overrides.

use alloy_primitives::map::HashMap;
use std::fmt::Debug;

/// Supplies an alternate L1 public RPC URL for a network.
pub trait RpcOverrides: Debug + Send + Sync {
    /// Returns the override for `network`, or [`None`] to keep the configured endpoint.
    fn l1_rpc(&self, network: &str) -> Option<String>;
}

/// Reads overrides from the CI environment variables used by the registry.
///
/// `mainnet` reads `CIRCLE_CI_MAINNET_RPC`; `sepolia` and `sepolia-dev-0` read
/// `CIRCLE_CI_SEPOLIA_RPC`. Unset or empty variables, and any other network, yield no
/// override.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvRpcOverrides;

impl EnvRpcOverrides {
    /// The environment variable consulted for `network`, if it is a recognized name.
    pub fn variable_for(network: &str) -> Option<&'static str> {
        match network {
            "mainnet" => Some("CIRCLE_CI_MAINNET_RPC"),
            "sepolia" | "sepolia-dev-0" => Some("CIRCLE_CI_SEPOLIA_RPC"),
            _ => None,
        }
    }
}

impl RpcOverrides for EnvRpcOverrides {
    fn l1_rpc(&self, network: &str) -> Option<String> {
        let var = Self::variable_for(network)?;
        non_empty(std::env::var(var).ok())
    }
}

/// An empty override value counts as no override.
fn non_empty(rpc: Option<String>) -> Option<String> {
    rpc.filter(|rpc| !rpc.is_empty())
}

/// Never overrides anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRpcOverrides;

impl RpcOverrides for NoRpcOverrides {
    fn l1_rpc(&self, _network: &str) -> Option<String> {
        None
    }
}

/// Overrides from a fixed network name to RPC URL table.
#[derive(Debug, Clone, Default)]
pub struct StaticRpcOverrides(HashMap<String, String>);

impl StaticRpcOverrides {
    /// Adds an override for `network`.
    pub fn with(mut self, network: impl Into<String>, rpc: impl Into<String>) -> Self {
        self.0.insert(network.into(), rpc.into());
        self
    }
}

impl RpcOverrides for StaticRpcOverrides {
    fn l1_rpc(&self, network: &str) -> Option<String> {
        non_empty(self.0.get(network).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_networks() {
        assert_eq!(EnvRpcOverrides::variable_for("mainnet"), Some("CIRCLE_CI_MAINNET_RPC"));
        assert_eq!(EnvRpcOverrides::variable_for("sepolia"), Some("CIRCLE_CI_SEPOLIA_RPC"));
        assert_eq!(EnvRpcOverrides::variable_for("sepolia-dev-0"), Some("CIRCLE_CI_SEPOLIA_RPC"));
        assert_eq!(EnvRpcOverrides::variable_for("alpha"), None);
        assert_eq!(EnvRpcOverrides.l1_rpc("alpha"), None);
    }

    #[test]
    fn test_empty_value_is_no_override() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(
            non_empty(Some("https://ci.example".to_string())).as_deref(),
            Some("https://ci.example")
        );
    }

    #[test]
    fn test_static_overrides_ignore_empty() {
        let overrides = StaticRpcOverrides::default()
            .with("mainnet", "https://ci.example")
            .with("sepolia", "");
        assert_eq!(overrides.l1_rpc("mainnet").as_deref(), Some("https://ci.example"));
        assert_eq!(overrides.l1_rpc("sepolia"), None);
        assert_eq!(overrides.l1_rpc("other"), None);
        assert_eq!(NoRpcOverrides.l1_rpc("mainnet"), None);
    }
}
