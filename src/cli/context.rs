//! Command execution context
//!
//! Provides a unified context for command execution: config loading, origin
//! and base URL resolution, token storage and client construction.

use std::sync::Arc;

use clap::ValueEnum;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::token::MemoryTokenStore;
use crate::client::{
    BaseUrl, EmbuibeClient, HttpClient, Origin, StorageTokenStore, TerminalNavigator, TokenStore,
};
use crate::config::Config;
use crate::error::Result;
use crate::storage::LocalStorage;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// API client bound to the resolved base URL
    pub client: Arc<EmbuibeClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context whose session token persists in local storage.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded, the origin does not parse
    /// or the storage database cannot be opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let storage = LocalStorage::open_at(&Config::data_dir(opts.config_ref())?)?;
        let tokens: Arc<dyn TokenStore> = Arc::new(StorageTokenStore::new(storage));

        Self::build(opts, &config, tokens)
    }

    /// Create a context with a throwaway token store, for calls that never
    /// authenticate.
    pub fn ephemeral(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        Self::build(opts, &config, Arc::new(MemoryTokenStore::new()))
    }

    fn build(opts: &GlobalOptions, config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let origin = resolve_origin(opts, config)?;
        let api_url = opts.api_url_ref().or(config.api_url.as_deref());
        let base_url = BaseUrl::resolve(origin.clone(), api_url);
        let navigator = Arc::new(TerminalNavigator::new(&origin.path));

        let http = HttpClient::new(base_url, tokens, navigator)?;
        let format = resolve_format(opts, config);

        Ok(Self {
            client: Arc::new(EmbuibeClient::new(http)),
            format,
        })
    }
}

/// `--origin` flag/env, then the config file
pub fn resolve_origin(opts: &GlobalOptions, config: &Config) -> Result<Origin> {
    match opts.origin_ref() {
        Some(origin) => Ok(Origin::parse(origin)?),
        None => config.origin(),
    }
}

/// `--format` flag/env, then the config preference, then pretty
fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    if let Some(format) = opts.format {
        return format;
    }

    config
        .preferences
        .format
        .as_deref()
        .and_then(|f| {
            OutputFormat::from_str(f, true)
                .map_err(|_| log::warn!("Ignoring unknown format preference '{}'", f))
                .ok()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Navigator;
    use tempfile::TempDir;

    fn opts_in(dir: &TempDir) -> GlobalOptions {
        GlobalOptions {
            config: Some(dir.path().join("config.yaml").display().to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_target_local_backend() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::new(&opts_in(&dir)).unwrap();

        assert_eq!(ctx.format, OutputFormat::Pretty);
        assert_eq!(
            ctx.client.http().base_url().as_str(),
            "http://localhost:8000/api/v1"
        );
        assert!(dir.path().join("storage.db").exists());
    }

    #[test]
    fn test_flag_overrides_config_api_url() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.api_url = Some("http://from-config/api/v1".to_string());
        config.preferences.format = Some("json".to_string());
        config.save_to(&dir.path().join("config.yaml")).unwrap();

        let ctx = CommandContext::new(&opts_in(&dir)).unwrap();
        assert_eq!(ctx.client.http().base_url().as_str(), "http://from-config/api/v1");
        assert_eq!(ctx.format, OutputFormat::Json);

        let mut opts = opts_in(&dir);
        opts.api_url = Some("http://from-flag/api/v1".to_string());
        opts.format = Some(OutputFormat::Table);
        let ctx = CommandContext::new(&opts).unwrap();
        assert_eq!(ctx.client.http().base_url().as_str(), "http://from-flag/api/v1");
        assert_eq!(ctx.format, OutputFormat::Table);
    }

    #[test]
    fn test_origin_override() {
        let dir = TempDir::new().unwrap();
        let mut opts = opts_in(&dir);
        opts.origin = Some("https://embuibe.com.br/dashboard.html".to_string());

        let ctx = CommandContext::ephemeral(&opts).unwrap();
        assert_eq!(ctx.client.http().base_url().as_str(), "/api/v1");
        assert_eq!(ctx.client.http().navigator().current_path(), "/dashboard.html");
    }

    #[test]
    fn test_unknown_format_preference_falls_back() {
        let mut config = Config::default();
        config.preferences.format = Some("yaml".to_string());

        assert_eq!(
            resolve_format(&GlobalOptions::default(), &config),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_bad_origin_is_error() {
        let dir = TempDir::new().unwrap();
        let mut opts = opts_in(&dir);
        opts.origin = Some("::nope::".to_string());

        assert!(CommandContext::ephemeral(&opts).is_err());
    }
}
