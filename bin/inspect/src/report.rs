//! Serializable views over a loaded [`Registry`].

use serde::Serialize;
use superchain_registry::{
    AddressList, ChainConfig, ChainLoadError, GenesisSystemConfig, Registry, Superchain,
};

/// One line per chain in a [`NetworkSummary`].
#[derive(Debug, Serialize)]
pub(crate) struct ChainSummary<'a> {
    pub(crate) chain_id: u64,
    pub(crate) chain: &'a str,
    pub(crate) name: &'a str,
    pub(crate) fault_proofs: bool,
}

/// A network and its chains.
#[derive(Debug, Serialize)]
pub(crate) struct NetworkSummary<'a> {
    pub(crate) network: &'a str,
    pub(crate) name: &'a str,
    pub(crate) l1_chain_id: u64,
    pub(crate) chains: Vec<ChainSummary<'a>>,
    pub(crate) fault_proof_categories: Vec<&'static str>,
}

/// Output of the `summary` subcommand.
#[derive(Debug, Serialize)]
pub(crate) struct SummaryReport<'a> {
    pub(crate) networks: Vec<NetworkSummary<'a>>,
    pub(crate) warnings: Vec<String>,
}

impl<'a> SummaryReport<'a> {
    /// Builds a summary with networks sorted by name.
    pub(crate) fn new(registry: &'a Registry, warnings: &[ChainLoadError]) -> Self {
        let mut superchains = registry.superchains().collect::<Vec<&Superchain>>();
        superchains.sort_by(|a, b| a.superchain.cmp(&b.superchain));

        let networks = superchains
            .into_iter()
            .map(|superchain| NetworkSummary {
                network: &superchain.superchain,
                name: &superchain.config.name,
                l1_chain_id: superchain.config.l1.chain_id,
                chains: registry
                    .chains_in(&superchain.superchain)
                    .map(|config| ChainSummary {
                        chain_id: config.chain_id,
                        chain: &config.chain,
                        name: &config.name,
                        fault_proofs: registry
                            .addresses(config.chain_id)
                            .is_some_and(AddressList::has_fault_proofs),
                    })
                    .collect(),
                fault_proof_categories: registry
                    .implementations(&superchain.superchain)
                    .map(|implementations| implementations.fault_proof_categories().collect())
                    .unwrap_or_default(),
            })
            .collect();

        Self { networks, warnings: warnings.iter().map(ToString::to_string).collect() }
    }
}

/// Output of the `chain` subcommand.
#[derive(Debug, Serialize)]
pub(crate) struct ChainReport<'a> {
    pub(crate) config: &'a ChainConfig,
    pub(crate) addresses: &'a AddressList,
    pub(crate) genesis_system_config: &'a GenesisSystemConfig,
}

impl<'a> ChainReport<'a> {
    /// Collects everything the registry holds for `chain_id`.
    pub(crate) fn new(registry: &'a Registry, chain_id: u64) -> Option<Self> {
        Some(Self {
            config: registry.chain(chain_id)?,
            addresses: registry.addresses(chain_id)?,
            genesis_system_config: registry.genesis_system_config(chain_id)?,
        })
    }
}
