//! Chain-level configuration types.

mod config;
pub use config::ChainConfig;

mod addresses;
pub use addresses::AddressList;

mod hardfork;
pub use hardfork::{HardFork, HardForkSchedule};

mod level;
pub use level::SuperchainLevel;

mod plasma;
pub use plasma::PlasmaConfig;
