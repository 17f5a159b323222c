//! [tracing_subscriber] utilities.

use crate::LogConfig;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// The format of the logs.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum LogFormat {
    /// Full format (default).
    #[default]
    Full,
    /// JSON format.
    Json,
    /// Pretty format.
    Pretty,
    /// Compact format.
    Compact,
}

impl LogConfig {
    /// Initializes the global tracing subscriber, writing to stderr so command output on
    /// stdout stays machine readable.
    ///
    /// Directives from `env_filter` (or `RUST_LOG` if `None`) are combined with the
    /// configured global level.
    pub fn init_tracing_subscriber(
        &self,
        env_filter: Option<EnvFilter>,
    ) -> Result<(), TryInitError> {
        let layer = self.format.map(|format| {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            match format {
                LogFormat::Full => layer.boxed(),
                LogFormat::Json => layer.json().boxed(),
                LogFormat::Pretty => layer.pretty().boxed(),
                LogFormat::Compact => layer.compact().boxed(),
            }
        });

        let env_filter = env_filter
            .unwrap_or_else(EnvFilter::from_default_env)
            .add_directive(self.global_level.into());

        tracing_subscriber::registry().with(env_filter).with(layer).try_init()
    }
}
