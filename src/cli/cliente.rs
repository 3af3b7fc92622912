//! Customer commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::ClienteApi;
use crate::client::models::{ClienteInput, ClienteQuery, ClienteUpdate};
use crate::error::{Error, Result};
use crate::output::{self, Column};

fn columns() -> Vec<Column> {
    vec![
        Column::text("ID", "id"),
        Column::text("NAME", "nome"),
        Column::text("PHONE", "telefone"),
        Column::text("CITY", "cidade"),
        Column::text("DISTRICT", "bairro"),
        Column::datetime("CREATED", "created_at"),
    ]
}

/// Run the cliente list command
pub async fn list(opts: &GlobalOptions, query: ClienteQuery) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page = ctx.client.list_clientes(&query).await?;
    output::print(&page, ctx.format, &columns())
}

/// Run the cliente get command
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cliente = ctx.client.get_cliente(id).await?;
    output::print(&cliente, ctx.format, &columns())
}

/// Run the cliente create command
pub async fn create(opts: &GlobalOptions, input: ClienteInput) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cliente = ctx.client.create_cliente(&input).await?;
    output::print(&cliente, ctx.format, &columns())
}

/// Run the cliente update command
pub async fn update(opts: &GlobalOptions, id: i64, changes: ClienteUpdate) -> Result<()> {
    if changes.is_empty() {
        return Err(Error::Other("Nothing to update; pass at least one field".to_string()));
    }

    let ctx = CommandContext::new(opts)?;
    let cliente = ctx.client.update_cliente(id, &changes).await?;
    output::print(&cliente, ctx.format, &columns())
}

/// Run the cliente delete command
pub async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let cliente = ctx.client.get_cliente(id).await?;
        let nome = cliente.get("nome").and_then(|n| n.as_str()).unwrap_or("?");
        eprintln!("{} Deactivate customer \"{}\" (#{})?", "⚠".yellow(), nome, id);

        let confirm = Confirm::new()
            .with_prompt("Confirm?")
            .default(false)
            .interact()?;
        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.client.delete_cliente(id).await?;
    match result.get("message").and_then(|m| m.as_str()) {
        Some(message) => println!("{} {}", "✓".green(), message),
        None => println!("{} Customer {} deactivated", "✓".green(), id),
    }
    Ok(())
}
