//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are resolved
/// later in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config preference
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.embuibe/config.yaml)
    pub config: Option<String>,

    /// Page origin override
    pub origin: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            origin: cli.origin.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn origin_ref(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_globals() {
        let cli = Cli::try_parse_from([
            "embuibe",
            "--format",
            "json",
            "--config",
            "/tmp/embuibe.yaml",
            "--api-url",
            "http://10.0.0.2:8000/api/v1",
            "status",
        ])
        .unwrap();

        let opts = GlobalOptions::from_cli(&cli);
        assert_eq!(opts.format, Some(OutputFormat::Json));
        assert_eq!(opts.config_ref(), Some("/tmp/embuibe.yaml"));
        assert_eq!(opts.api_url_ref(), Some("http://10.0.0.2:8000/api/v1"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.format, None);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.origin_ref(), None);
        assert_eq!(opts.api_url_ref(), None);
    }
}
