//! Error types for the registry loader.

use crate::EntityKind;
use std::{io, path::PathBuf};
use thiserror::Error;

/// An error raised while loading the registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A document could not be decoded, or a required field is missing or invalid.
    #[error("Malformed {kind} in {}: {reason}", .path.display())]
    MalformedEntity {
        /// The kind of entity being parsed.
        kind: EntityKind,
        /// The file the entity was read from.
        path: PathBuf,
        /// What was wrong with it, naming the offending field where known.
        reason: String,
    },
    /// A chain's sibling artifact does not exist.
    #[error("Missing {kind} for chain {network}/{chain}: {} not found", .path.display())]
    MissingArtifact {
        /// The kind of artifact that is missing.
        kind: EntityKind,
        /// The network the chain belongs to.
        network: String,
        /// The chain identifier (config file stem).
        chain: String,
        /// The expected location of the artifact.
        path: PathBuf,
    },
    /// A path could not be enumerated or read.
    #[error("Failed to read {}: {source}", .path.display())]
    UnreadableSource {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Two chains declare the same chain id.
    #[error("Duplicate chain id {chain_id}: declared by {first} and {second}")]
    DuplicateChainId {
        /// The shared chain id.
        chain_id: u64,
        /// The chain that was indexed first, as `<network>/<chain>`.
        first: String,
        /// The chain that was rejected, as `<network>/<chain>`.
        second: String,
    },
    /// Strict mode: one or more chains failed to load.
    #[error("{} chain(s) failed to load", .0.len())]
    ChainsFailed(Vec<ChainLoadError>),
}

/// A failure scoped to a single chain. In non-strict mode these are collected as warnings
/// and the chain is left out of the registry.
#[derive(Error, Debug)]
#[error("{network}/{chain}: {error}")]
pub struct ChainLoadError {
    /// The network the chain belongs to.
    pub network: String,
    /// The chain identifier (config file stem).
    pub chain: String,
    /// The underlying error.
    #[source]
    pub error: RegistryError,
}

impl ChainLoadError {
    /// Creates a new [`ChainLoadError`].
    pub fn new(network: impl Into<String>, chain: impl Into<String>, error: RegistryError) -> Self {
        Self { network: network.into(), chain: chain.into(), error }
    }
}
