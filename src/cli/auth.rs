//! Session commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::error::Result;
use crate::output;

/// Run the login command, prompting for whatever was not passed
pub async fn login(opts: &GlobalOptions, user: Option<String>, password: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let user = match user {
        Some(u) => u,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Login")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Senha")
            .interact()?,
    };

    let response = ctx.client.login(&user, &password).await?;

    match response.usuario {
        Some(ref usuario) => println!(
            "{} Logged in as {} ({})",
            "✓".green(),
            usuario.nome.bold(),
            usuario.tipo
        ),
        None => println!("{} Logged in as {}", "✓".green(), user.bold()),
    }

    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.client.logout();
    Ok(())
}

/// Run the me command
pub async fn me(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let usuario = ctx.client.me().await?;

    output::print(
        &usuario,
        ctx.format,
        &[
            output::Column::text("ID", "id"),
            output::Column::text("NAME", "nome"),
            output::Column::text("LOGIN", "login"),
            output::Column::text("TYPE", "tipo"),
        ],
    )
}
