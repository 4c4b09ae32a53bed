//! Run configuration assembled from command-line arguments.
//!
//! Everything the commands need is resolved and validated here, before any
//! derivation work starts. No environment variables are consulted.

use anyhow::{anyhow, Result};
use pdagen_core::config::CodecConfig;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<address>,<bump>,<uuid>`
    Line,
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub format: OutputFormat,
    pub log_filter: String,
    pub codec: CodecConfig,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cfg = Self {
            format: if cli.json { OutputFormat::Json } else { OutputFormat::Line },
            log_filter: cli.log.clone(),
            codec: CodecConfig::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.env_filter()?;
        Ok(())
    }

    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| anyhow!("invalid --log filter '{}': {e}", self.log_filter))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Line,
            log_filter: "warn".to_string(),
            codec: CodecConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_config_is_valid() {
        RunConfig::default().validate().unwrap();
    }

    #[test]
    fn from_cli_reads_flags() {
        let cli = Cli::try_parse_from(["pdagen", "--program-id", "x", "--json", "--log", "pdagen_solana=trace"])
            .unwrap();
        let cfg = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.log_filter, "pdagen_solana=trace");
    }

    #[test]
    fn bad_log_filter_detected() {
        let cfg = RunConfig {
            log_filter: "pdagen=loud".to_string(),
            ..RunConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid --log filter"));
    }
}
