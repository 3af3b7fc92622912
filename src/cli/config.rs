//! Local configuration commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::BaseUrl;
use crate::config::Config;
use crate::error::Result;

/// Print the effective configuration
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let origin = crate::cli::context::resolve_origin(opts, &config)?;
    let api_url = opts.api_url_ref().or(config.api_url.as_deref());
    let base_url = BaseUrl::resolve(origin, api_url);

    print!("{}", serde_yaml::to_string(&config).map_err(crate::error::ConfigError::from)?);
    println!("{} {}", "# resolved API base URL:".dimmed(), base_url.as_str());
    Ok(())
}

/// Set the page origin
pub fn set_origin(opts: &GlobalOptions, url: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    config.set_origin(url)?;
    config.save_at(opts.config_ref())?;

    println!("{} Origin set to {}", "✓".green(), url.cyan());
    Ok(())
}

/// Set an explicit API base URL
pub fn set_api_url(opts: &GlobalOptions, url: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    config.api_url = Some(url.to_string());
    config.save_at(opts.config_ref())?;

    println!("{} API base URL set to {}", "✓".green(), url.cyan());
    Ok(())
}

/// Remove the explicit API base URL
pub fn unset_api_url(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    if config.api_url.take().is_none() {
        println!("{} No API base URL configured", "○".dimmed());
        return Ok(());
    }
    config.save_at(opts.config_ref())?;

    println!("{} API base URL removed", "✓".green());
    Ok(())
}
