#![doc = include_str!("../README.md")]
#![doc(
    issue_tracker_base_url = "https://github.com/ethereum-optimism/superchain-registry/issues/"
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod styles;
pub use styles::cli_styles;

pub mod log;
pub use log::{LogArgs, LogConfig};

mod tracing;
pub use tracing::LogFormat;
