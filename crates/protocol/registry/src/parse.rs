//! Entity parsers: typed views over a [`Document`].
//!
//! The field naming convention differs per artifact (snake_case for network and chain
//! configs, PascalCase for address lists, camelCase for genesis system configs) and is fixed
//! by the `serde` attributes on the target types.

use crate::{
    AddressList, ChainConfig, ContractImplementations, Document, GenesisSystemConfig,
    RegistryError, SuperchainConfig,
};
use serde::de::DeserializeOwned;

/// The kinds of entity found in the registry tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EntityKind {
    /// `superchain.yaml`
    #[display("network defaults")]
    NetworkDefaults,
    /// `<chain>.yaml`
    #[display("chain config")]
    ChainConfig,
    /// `extra/addresses/<network>/<chain>.json`
    #[display("address list")]
    AddressList,
    /// `extra/genesis-system-configs/<network>/<chain>.json`
    #[display("genesis system config")]
    GenesisSystemConfig,
    /// `implementations/**.yaml`
    #[display("contract implementations")]
    ContractImplementations,
}

/// Decodes `document` as `T`.
///
/// Missing required fields, failed address validation and out-of-domain enum values all
/// surface as [`RegistryError::MalformedEntity`] naming `kind` and the document path.
pub fn parse_entity<T: DeserializeOwned>(
    kind: EntityKind,
    document: &Document,
) -> Result<T, RegistryError> {
    T::deserialize(document.value()).map_err(|e| RegistryError::MalformedEntity {
        kind,
        path: document.path().to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parses network defaults.
pub fn parse_superchain_config(document: &Document) -> Result<SuperchainConfig, RegistryError> {
    parse_entity(EntityKind::NetworkDefaults, document)
}

/// Parses a chain config, stamping it with the chain identifier derived from its file name.
pub fn parse_chain_config(document: &Document, chain: &str) -> Result<ChainConfig, RegistryError> {
    let mut config: ChainConfig = parse_entity(EntityKind::ChainConfig, document)?;
    config.chain = chain.to_string();
    Ok(config)
}

/// Parses an address list.
pub fn parse_address_list(document: &Document) -> Result<AddressList, RegistryError> {
    parse_entity(EntityKind::AddressList, document)
}

/// Parses a genesis system config.
pub fn parse_genesis_system_config(
    document: &Document,
) -> Result<GenesisSystemConfig, RegistryError> {
    parse_entity(EntityKind::GenesisSystemConfig, document)
}

/// Parses a contract implementations map.
///
/// An empty document decodes to an empty set.
pub fn parse_implementations(
    document: &Document,
) -> Result<ContractImplementations, RegistryError> {
    if document.value().is_null() {
        return Ok(ContractImplementations::default());
    }
    parse_entity(EntityKind::ContractImplementations, document)
}
