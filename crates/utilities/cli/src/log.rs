//! Arguments for logging.

use crate::LogFormat;
use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Global logging arguments.
#[derive(Args, Debug, Default, Serialize, Deserialize, Clone)]
pub struct LogArgs {
    /// Verbosity level (1-5). Defaults to 3 (info).
    #[arg(
        short = 'v',
        global = true,
        default_value = "3",
        env = "SUPERCHAIN_LOG_LEVEL",
        action = ArgAction::Count,
    )]
    pub level: u8,
    /// If set, no logs are printed to stderr.
    #[arg(long = "logs.quiet", short = 'q', global = true, default_value = "false")]
    pub quiet: bool,
    /// The format of the logs. One of: full, json, pretty, compact.
    #[arg(
        long = "logs.format",
        global = true,
        default_value = "full",
        env = "SUPERCHAIN_LOG_FORMAT"
    )]
    pub format: LogFormat,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Global verbosity level.
    pub global_level: LevelFilter,
    /// Output format, or `None` if logging is disabled.
    pub format: Option<LogFormat>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { global_level: LevelFilter::DEBUG, format: Some(LogFormat::Full) }
    }
}

impl From<LogArgs> for LogConfig {
    fn from(args: LogArgs) -> Self {
        Self::new(args)
    }
}

impl LogConfig {
    /// Creates a new `LogConfig` from `LogArgs`.
    pub fn new(args: LogArgs) -> Self {
        let global_level = match args.level {
            0 => LevelFilter::OFF,
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        let format = (!args.quiet).then_some(args.format);
        Self { global_level, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        logs: LogArgs,
    }

    #[test]
    fn test_default_verbosity_level() {
        let cli = TestCli::parse_from(["test_app"]);
        assert_eq!(cli.logs.level, 3);
        assert_eq!(LogConfig::from(cli.logs).global_level, LevelFilter::INFO);
    }

    #[test]
    fn test_verbosity_count() {
        let cli = TestCli::parse_from(["test_app", "-v"]);
        assert_eq!(cli.logs.level, 1);
        assert_eq!(LogConfig::from(cli.logs).global_level, LevelFilter::ERROR);

        let cli = TestCli::parse_from(["test_app", "-vvvvv"]);
        assert_eq!(LogConfig::from(cli.logs).global_level, LevelFilter::TRACE);
    }

    #[test]
    fn test_quiet_disables_output() {
        let cli = TestCli::parse_from(["test_app", "-q", "--logs.format", "json"]);
        assert!(LogConfig::from(cli.logs).format.is_none());

        let cli = TestCli::parse_from(["test_app", "--logs.format", "json"]);
        assert_eq!(LogConfig::from(cli.logs).format, Some(LogFormat::Json));
    }
}
