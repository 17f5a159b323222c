//! Command line interface.

use crate::report::{ChainReport, SummaryReport};
use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use superchain_cli::{LogArgs, cli_styles};
use superchain_registry::{LoadOptions, Registry, RegistryLoader};
use tracing::{info, warn};

/// Inspects a superchain registry tree.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, styles = cli_styles())]
pub(crate) struct Cli {
    /// What to print.
    #[command(subcommand)]
    pub(crate) command: Command,
    /// Loader arguments.
    #[command(flatten)]
    pub(crate) load: LoadArgs,
    /// Logging arguments.
    #[command(flatten)]
    pub(crate) logs: LogArgs,
}

/// Arguments controlling how the registry is loaded.
#[derive(Args, Debug, Clone)]
pub(crate) struct LoadArgs {
    /// Root directory of the registry tree.
    #[arg(long, global = true, env = "SUPERCHAIN_REGISTRY_ROOT", default_value = "superchain")]
    pub(crate) root: PathBuf,
    /// Fail if any chain fails to load.
    #[arg(long, global = true)]
    pub(crate) strict: bool,
    /// Load networks and chains one at a time.
    #[arg(long, global = true)]
    pub(crate) sequential: bool,
}

impl LoadArgs {
    pub(crate) const fn options(&self) -> LoadOptions {
        LoadOptions { strict: self.strict, parallel: !self.sequential }
    }
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Print every network with its chains.
    Summary,
    /// Print a chain's config, address list and genesis system config.
    Chain {
        /// The chain id.
        chain_id: u64,
    },
    /// Print the merged contract implementations of a network.
    Implementations {
        /// The network name.
        network: String,
    },
}

impl Cli {
    /// Loads the registry and runs the subcommand.
    pub(crate) fn run(self) -> Result<()> {
        let outcome = RegistryLoader::new(&self.load.root)
            .with_options(self.load.options())
            .load()
            .with_context(|| format!("failed to load registry at {}", self.load.root.display()))?;
        if !outcome.warnings.is_empty() {
            warn!(target: "inspect", count = outcome.warnings.len(), "Some chains were left out");
        }

        match self.command {
            Command::Summary => {
                print_json(&SummaryReport::new(&outcome.registry, &outcome.warnings))
            }
            Command::Chain { chain_id } => print_json(&chain_report(&outcome.registry, chain_id)?),
            Command::Implementations { network } => {
                let implementations = outcome
                    .registry
                    .implementations(&network)
                    .ok_or_else(|| anyhow!("unknown network: {network}"))?;
                print_json(implementations)
            }
        }
    }
}

fn chain_report(registry: &Registry, chain_id: u64) -> Result<ChainReport<'_>> {
    let report = ChainReport::new(registry, chain_id)
        .ok_or_else(|| anyhow!("chain {chain_id} is not in the registry"))?;
    info!(target: "inspect", chain_id, superchain = %report.config.superchain, "Found chain");
    Ok(report)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
