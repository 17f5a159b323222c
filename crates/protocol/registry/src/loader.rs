//! The registry loader: traverses a registry tree and assembles a [`Registry`].

use crate::{
    AddressList, ChainConfig, ChainLoadError, ContractImplementations, Document, EntityKind,
    EnvRpcOverrides, GenesisSystemConfig, Registry, RegistryError, RegistryLayout, RpcOverrides,
    Superchain, SuperchainConfig, layout::chain_slug, parse_address_list, parse_chain_config,
    parse_genesis_system_config, parse_implementations, parse_superchain_config,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Options controlling a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Fail the whole load if any chain fails, instead of reporting it as a warning.
    pub strict: bool,
    /// Traverse networks, and chains within a network, in parallel.
    pub parallel: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { strict: false, parallel: true }
    }
}

/// The phases of a load, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum LoadStage {
    /// Nothing has happened yet.
    #[default]
    #[display("idle")]
    Idle,
    /// Listing the network directories under `configs/`.
    #[display("enumerating networks")]
    EnumeratingNetworks,
    /// Parsing a network's `superchain.yaml`.
    #[display("parsing network defaults")]
    ParsingNetworkDefaults,
    /// Parsing a network's chain configs.
    #[display("parsing chains")]
    ParsingChains,
    /// Reading each chain's address list and genesis system config.
    #[display("joining artifacts")]
    JoiningArtifacts,
    /// Merging the global and network contract implementations.
    #[display("merging implementations")]
    MergingImplementations,
    /// The registry is complete.
    #[display("indexed")]
    Indexed,
}

/// The result of a successful load.
#[derive(Debug)]
pub struct LoadOutcome {
    /// The loaded registry.
    pub registry: Registry,
    /// Chains that failed to load and were left out. Always empty in strict mode.
    pub warnings: Vec<ChainLoadError>,
}

/// Everything loaded for one chain.
#[derive(Debug)]
struct LoadedChain {
    config: ChainConfig,
    addresses: AddressList,
    system_config: GenesisSystemConfig,
}

/// Everything loaded for one network, before indexing.
#[derive(Debug)]
struct LoadedNetwork {
    name: String,
    config: SuperchainConfig,
    chains: Vec<Result<LoadedChain, ChainLoadError>>,
    implementations: ContractImplementations,
}

/// Loads a registry tree rooted at a fixed path.
///
/// Each call to [`RegistryLoader::load`] builds a fresh [`Registry`]; nothing is cached
/// between loads.
#[derive(Debug)]
pub struct RegistryLoader {
    layout: RegistryLayout,
    options: LoadOptions,
    overrides: Box<dyn RpcOverrides>,
}

impl RegistryLoader {
    /// Creates a loader for the tree at `root`, with default options and L1 RPC overrides
    /// read from the environment.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: RegistryLayout::new(root),
            options: LoadOptions::default(),
            overrides: Box::new(EnvRpcOverrides),
        }
    }

    /// Sets the load options.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the source of L1 RPC overrides.
    pub fn with_overrides(mut self, overrides: impl RpcOverrides + 'static) -> Self {
        self.overrides = Box::new(overrides);
        self
    }

    /// Returns the layout of the tree being loaded.
    pub const fn layout(&self) -> &RegistryLayout {
        &self.layout
    }

    /// Returns the load options.
    pub const fn options(&self) -> LoadOptions {
        self.options
    }

    /// Loads the registry.
    ///
    /// Network level failures (unreadable directories, a missing or malformed
    /// `superchain.yaml`, a missing global implementations file, a malformed network
    /// implementations file) abort the load. Chain level failures are collected; in strict
    /// mode any of them fails the load with [`RegistryError::ChainsFailed`].
    pub fn load(&self) -> Result<LoadOutcome, RegistryError> {
        info!(
            target: "registry",
            root = %self.layout.root().display(),
            "Loading superchain registry"
        );

        debug!(target: "registry", stage = %LoadStage::EnumeratingNetworks);
        let networks = self.enumerate_networks()?;

        let global = parse_implementations(&Document::read(
            &self.layout.global_implementations(),
            EntityKind::ContractImplementations,
        )?)?;

        let networks = self
            .traverse(networks, |network| self.load_network(network, &global))
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut registry = Registry::default();
        let mut warnings = Vec::new();
        for network in networks {
            Self::index_network(&mut registry, &mut warnings, network);
        }

        for warning in &warnings {
            warn!(
                target: "registry",
                network = %warning.network,
                chain = %warning.chain,
                error = %warning.error,
                "Chain left out of registry"
            );
        }
        if self.options.strict && !warnings.is_empty() {
            return Err(RegistryError::ChainsFailed(warnings));
        }

        debug!(target: "registry", stage = %LoadStage::Indexed);
        info!(
            target: "registry",
            networks = registry.superchains().count(),
            chains = registry.len(),
            warnings = warnings.len(),
            "Superchain registry loaded"
        );
        Ok(LoadOutcome { registry, warnings })
    }

    /// Maps `items` with `f`, in parallel if enabled. Output order matches input order.
    fn traverse<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        if self.options.parallel {
            items.into_par_iter().map(f).collect()
        } else {
            items.into_iter().map(f).collect()
        }
    }

    /// Lists the network directory names under `configs/`, sorted.
    fn enumerate_networks(&self) -> Result<Vec<String>, RegistryError> {
        let configs = self.layout.configs_dir();
        let mut networks = Vec::new();
        for entry in read_dir(&configs)? {
            let entry = entry.map_err(|source| unreadable(&configs, source))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => networks.push(name),
                Err(name) => {
                    warn!(
                        target: "registry",
                        ?name,
                        "Skipping network directory with a non UTF-8 name"
                    )
                }
            }
        }
        networks.sort();
        Ok(networks)
    }

    /// Lists `(chain, path)` pairs for the chain configs of `network`, sorted by file name.
    fn enumerate_chains(&self, network: &str) -> Result<Vec<(String, PathBuf)>, RegistryError> {
        let dir = self.layout.network_dir(network);
        let mut chains = Vec::new();
        for entry in read_dir(&dir)? {
            let entry = entry.map_err(|source| unreadable(&dir, source))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
                warn!(
                    target: "registry",
                    network,
                    path = %path.display(),
                    "Skipping file with a non UTF-8 name"
                );
                continue;
            };
            if let Some(chain) = chain_slug(&file_name) {
                chains.push((chain.to_string(), path));
            }
        }
        chains.sort();
        Ok(chains)
    }

    fn load_network(
        &self,
        name: String,
        global: &ContractImplementations,
    ) -> Result<LoadedNetwork, RegistryError> {
        debug!(target: "registry", stage = %LoadStage::ParsingNetworkDefaults, network = %name);
        let mut config = parse_superchain_config(&Document::read(
            &self.layout.superchain_config(&name),
            EntityKind::NetworkDefaults,
        )?)?;

        // Chains resolve their hardforks against `config`, so it must be parsed first.
        debug!(target: "registry", stage = %LoadStage::ParsingChains, network = %name);
        let chains = self.traverse(self.enumerate_chains(&name)?, |(chain, path)| {
            self.load_chain(&name, &chain, &path, &config)
                .map_err(|error| ChainLoadError::new(name.as_str(), chain, error))
        });

        if let Some(rpc) = self.overrides.l1_rpc(&name) {
            debug!(target: "registry", network = %name, "Overriding L1 public RPC");
            config.l1.public_rpc = rpc;
        }

        debug!(target: "registry", stage = %LoadStage::MergingImplementations, network = %name);
        let implementations = self.load_implementations(&name, global)?;

        Ok(LoadedNetwork { name, config, chains, implementations })
    }

    fn load_chain(
        &self,
        network: &str,
        chain: &str,
        path: &Path,
        superchain: &SuperchainConfig,
    ) -> Result<LoadedChain, RegistryError> {
        let document = Document::read(path, EntityKind::ChainConfig)?;
        let mut config = parse_chain_config(&document, chain)?;
        config.inherit_hardfork_defaults(&superchain.hardfork_defaults);
        config.superchain = network.to_string();

        debug!(
            target: "registry",
            stage = %LoadStage::JoiningArtifacts,
            network,
            chain,
            chain_id = config.chain_id
        );
        let addresses = parse_address_list(&read_artifact(
            EntityKind::AddressList,
            network,
            chain,
            self.layout.address_list(network, chain),
        )?)?;
        let system_config = parse_genesis_system_config(&read_artifact(
            EntityKind::GenesisSystemConfig,
            network,
            chain,
            self.layout.genesis_system_config(network, chain),
        )?)?;

        Ok(LoadedChain { config, addresses, system_config })
    }

    /// Merges the network's override file, if any, on top of the global implementations.
    fn load_implementations(
        &self,
        network: &str,
        global: &ContractImplementations,
    ) -> Result<ContractImplementations, RegistryError> {
        let path = self.layout.network_implementations(network);
        let overrides = match Document::read(&path, EntityKind::ContractImplementations) {
            Ok(document) => parse_implementations(&document)?,
            Err(RegistryError::UnreadableSource { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                debug!(
                    target: "registry",
                    network,
                    "No network implementations file, using global implementations"
                );
                ContractImplementations::default()
            }
            Err(e) => return Err(e),
        };
        Ok(global.clone().merge(overrides))
    }

    /// Adds a loaded network to the registry. This is the only place the indices are written.
    fn index_network(
        registry: &mut Registry,
        warnings: &mut Vec<ChainLoadError>,
        network: LoadedNetwork,
    ) {
        let LoadedNetwork { name, config, chains, implementations } = network;
        let mut chain_ids = Vec::with_capacity(chains.len());
        for chain in chains {
            let LoadedChain { config, addresses, system_config } = match chain {
                Ok(chain) => chain,
                Err(e) => {
                    warnings.push(e);
                    continue;
                }
            };
            let slug = config.chain.clone();
            match registry.insert_chain(config, addresses, system_config) {
                Ok(chain_id) => chain_ids.push(chain_id),
                Err(error) => warnings.push(ChainLoadError::new(name.as_str(), slug, error)),
            }
        }

        registry.insert_implementations(name.clone(), implementations);
        registry.insert_superchain(Superchain { superchain: name, config, chain_ids });
    }
}

fn unreadable(path: &Path, source: io::Error) -> RegistryError {
    RegistryError::UnreadableSource { path: path.to_path_buf(), source }
}

fn read_dir(path: &Path) -> Result<fs::ReadDir, RegistryError> {
    fs::read_dir(path).map_err(|source| unreadable(path, source))
}

/// Reads a chain's sibling artifact, reporting a missing file as
/// [`RegistryError::MissingArtifact`].
fn read_artifact(
    kind: EntityKind,
    network: &str,
    chain: &str,
    path: PathBuf,
) -> Result<Document, RegistryError> {
    match Document::read(&path, kind) {
        Err(RegistryError::UnreadableSource { source, .. })
            if source.kind() == io::ErrorKind::NotFound =>
        {
            Err(RegistryError::MissingArtifact {
                kind,
                network: network.to_string(),
                chain: chain.to_string(),
                path,
            })
        }
        other => other,
    }
}
