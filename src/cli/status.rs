//! Status and health commands

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_origin;
use crate::client::token::token_expiry;
use crate::client::{AuthApi, BaseUrl, StorageTokenStore, TokenStore};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, formatters::format_age};
use crate::storage::LocalStorage;

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Embuibe Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }

    let config = Config::load_at(opts.config_ref())?;
    let origin = resolve_origin(opts, &config)?;
    let api_url = opts.api_url_ref().or(config.api_url.as_deref());
    let base_url = BaseUrl::resolve(origin.clone(), api_url);

    println!("Origin: {}", origin.to_string().cyan());
    println!("API base URL: {}", base_url.as_str().cyan());
    println!();

    let storage = LocalStorage::open_at(&Config::data_dir(opts.config_ref())?)?;
    let tokens = StorageTokenStore::new(storage);

    match tokens.get() {
        Some(token) => {
            let saved = tokens
                .saved_at()
                .map(|ts| format!(" (stored {})", format_age(ts)))
                .unwrap_or_default();
            println!("{} Session token present{}", "✓".green(), saved.dimmed());

            match token_expiry(&token) {
                Some(expires_at) if expires_at <= chrono::Utc::now() => {
                    println!("{} Token expired, run 'embuibe login'", "⚠".yellow());
                }
                Some(expires_at) => {
                    let remaining = expires_at.signed_duration_since(chrono::Utc::now());
                    println!(
                        "{} Token valid (expires in {}h {}m)",
                        "✓".green(),
                        remaining.num_hours(),
                        remaining.num_minutes() % 60
                    );
                }
                None => {}
            }
        }
        None => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run 'embuibe login' to sign in");
        }
    }

    Ok(())
}

/// Run the health command
pub async fn health(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::ephemeral(opts)?;
    let status = ctx.client.health().await?;

    if ctx.format == OutputFormat::Pretty {
        let state = status.get("status").and_then(|s| s.as_str()).unwrap_or("unknown");
        println!(
            "{} {} is {}",
            "✓".green(),
            ctx.client.http().base_url().as_str().cyan(),
            state.bold()
        );
        return Ok(());
    }

    output::print(&status, ctx.format, &[output::Column::text("STATUS", "status")])
}
