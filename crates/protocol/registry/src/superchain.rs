//! Contains the indexed [`Registry`] and a swappable [`RegistryHandle`].

use crate::{
    AddressList, ChainConfig, ChainLoadError, ContractImplementations, GenesisSystemConfig,
    LoadOutcome, RegistryError, RegistryLoader, Superchain,
};
use alloy_primitives::map::HashMap;
use std::{
    path::PathBuf,
    sync::{Arc, PoisonError, RwLock},
};
use tracing::info;

/// The superchain registry.
///
/// Every indexed chain id has an entry in each of the chain, address list and genesis
/// system config tables, and belongs to exactly one [`Superchain`]. A registry is immutable
/// once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Superchains keyed by network name.
    superchains: HashMap<String, Superchain>,
    /// Chain configs keyed by chain id.
    op_chains: HashMap<u64, ChainConfig>,
    /// Address lists keyed by chain id.
    addresses: HashMap<u64, AddressList>,
    /// Genesis system configs keyed by chain id.
    genesis_system_configs: HashMap<u64, GenesisSystemConfig>,
    /// Merged contract implementations keyed by network name.
    implementations: HashMap<String, ContractImplementations>,
}

impl Registry {
    /// Loads the registry tree at `root` with default options.
    ///
    /// Shorthand for `RegistryLoader::new(root).load()`.
    pub fn load(root: impl Into<PathBuf>) -> Result<LoadOutcome, RegistryError> {
        RegistryLoader::new(root).load()
    }

    /// Returns the superchain named `name`.
    pub fn superchain(&self, name: &str) -> Option<&Superchain> {
        self.superchains.get(name)
    }

    /// Returns all superchains, in no particular order.
    pub fn superchains(&self) -> impl Iterator<Item = &Superchain> {
        self.superchains.values()
    }

    /// Returns the chain config for `chain_id`.
    pub fn chain(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.op_chains.get(&chain_id)
    }

    /// Returns all chain configs, in no particular order.
    pub fn chains(&self) -> impl Iterator<Item = &ChainConfig> {
        self.op_chains.values()
    }

    /// Returns the chains of `network` in discovery order. Empty if the network is unknown.
    pub fn chains_in<'a>(&'a self, network: &str) -> impl Iterator<Item = &'a ChainConfig> {
        self.superchains
            .get(network)
            .into_iter()
            .flat_map(|superchain| superchain.chain_ids.iter())
            .filter_map(|chain_id| self.op_chains.get(chain_id))
    }

    /// Returns the chain of `network` whose config file stem is `chain`.
    pub fn chain_by_slug(&self, network: &str, chain: &str) -> Option<&ChainConfig> {
        self.chains_in(network).find(|config| config.chain == chain)
    }

    /// Returns the address list for `chain_id`.
    pub fn addresses(&self, chain_id: u64) -> Option<&AddressList> {
        self.addresses.get(&chain_id)
    }

    /// Returns the genesis system config for `chain_id`.
    pub fn genesis_system_config(&self, chain_id: u64) -> Option<&GenesisSystemConfig> {
        self.genesis_system_configs.get(&chain_id)
    }

    /// Returns the merged contract implementations for `network`.
    pub fn implementations(&self, network: &str) -> Option<&ContractImplementations> {
        self.implementations.get(network)
    }

    /// Returns the number of indexed chains.
    pub fn len(&self) -> usize {
        self.op_chains.len()
    }

    /// Returns `true` if no chains are indexed.
    pub fn is_empty(&self) -> bool {
        self.op_chains.is_empty()
    }

    /// Indexes a chain and its artifacts under its chain id.
    ///
    /// Fails with [`RegistryError::DuplicateChainId`] if the id is already taken, leaving
    /// the registry untouched.
    pub(crate) fn insert_chain(
        &mut self,
        config: ChainConfig,
        addresses: AddressList,
        system_config: GenesisSystemConfig,
    ) -> Result<u64, RegistryError> {
        let chain_id = config.chain_id;
        if let Some(first) = self.op_chains.get(&chain_id) {
            return Err(RegistryError::DuplicateChainId {
                chain_id,
                first: format!("{}/{}", first.superchain, first.chain),
                second: format!("{}/{}", config.superchain, config.chain),
            });
        }
        self.op_chains.insert(chain_id, config);
        self.addresses.insert(chain_id, addresses);
        self.genesis_system_configs.insert(chain_id, system_config);
        Ok(chain_id)
    }

    pub(crate) fn insert_superchain(&mut self, superchain: Superchain) {
        self.superchains.insert(superchain.superchain.clone(), superchain);
    }

    pub(crate) fn insert_implementations(
        &mut self,
        network: String,
        implementations: ContractImplementations,
    ) {
        self.implementations.insert(network, implementations);
    }
}

/// A shared, reloadable [`Registry`].
///
/// Readers take cheap snapshots; a reload builds a new registry off to the side and swaps it
/// in only if the load succeeds. Snapshots taken before a swap stay valid.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    inner: Arc<RwLock<Arc<Registry>>>,
}

impl RegistryHandle {
    /// Wraps `registry` in a new handle.
    pub fn new(registry: Registry) -> Self {
        Self { inner: Arc::new(RwLock::new(Arc::new(registry))) }
    }

    /// Returns the current registry.
    pub fn snapshot(&self) -> Arc<Registry> {
        Arc::clone(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Reloads with `loader` and swaps in the result.
    ///
    /// On error the current registry is kept. On success the chain warnings of the new load
    /// are returned.
    pub fn reload(&self, loader: &RegistryLoader) -> Result<Vec<ChainLoadError>, RegistryError> {
        let LoadOutcome { registry, warnings } = loader.load()?;
        let chains = registry.len();
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(registry);
        info!(target: "registry", chains, "Swapped in reloaded registry");
        Ok(warnings)
    }
}

impl From<Registry> for RegistryHandle {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}
