//! Superchain (network) level types.

mod config;
pub use config::SuperchainConfig;

mod info;
pub use info::SuperchainL1Info;

mod bundle;
pub use bundle::Superchain;
