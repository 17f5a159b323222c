#![doc = include_str!("../README.md")]
#![doc(
    issue_tracker_base_url = "https://github.com/ethereum-optimism/superchain-registry/issues/"
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub use superchain_genesis::*;

mod errors;
pub use errors::{ChainLoadError, RegistryError};

mod document;
pub use document::{Document, DocumentFormat};

mod parse;
pub use parse::{
    EntityKind, parse_address_list, parse_chain_config, parse_entity,
    parse_genesis_system_config, parse_implementations, parse_superchain_config,
};

mod layout;
pub use layout::{
    ADDRESSES_DIR, CONFIGS_DIR, EXTRA_DIR, GENESIS_SYSTEM_CONFIGS_DIR, GLOBAL_IMPLEMENTATIONS_FILE,
    IMPLEMENTATIONS_DIR, NETWORK_IMPLEMENTATIONS_DIR, RegistryLayout, SEMVER_FILE,
    SUPERCHAIN_CONFIG_FILE,
};

mod overrides;
pub use overrides::{EnvRpcOverrides, NoRpcOverrides, RpcOverrides, StaticRpcOverrides};

mod loader;
pub use loader::{LoadOptions, LoadOutcome, LoadStage, RegistryLoader};

mod superchain;
pub use superchain::{Registry, RegistryHandle};

#[cfg(test)]
mod test_utils;
