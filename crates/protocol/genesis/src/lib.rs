#![doc = include_str!("../README.md")]
#![doc(
    issue_tracker_base_url = "https://github.com/ethereum-optimism/superchain-registry/issues/"
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod block;
pub use block::BlockId;

mod genesis;
pub use genesis::ChainGenesis;

mod system;
pub use system::GenesisSystemConfig;

mod chain;
pub use chain::{
    AddressList, ChainConfig, HardFork, HardForkSchedule, PlasmaConfig, SuperchainLevel,
};

mod superchain;
pub use superchain::{Superchain, SuperchainConfig, SuperchainL1Info};

mod implementations;
pub use implementations::{ContractImplementations, VersionedAddresses};
