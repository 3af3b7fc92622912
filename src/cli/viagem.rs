//! Trip commands

use colored::Colorize;
use serde_json::Value;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, SaidaArgs};
use crate::client::ViagemApi;
use crate::client::models::{SaidaRequest, ViagemQuery};
use crate::error::Result;
use crate::output::{self, Column, formatters};

fn manifest_columns() -> Vec<Column> {
    vec![
        Column::text("TICKET", "numero_passagem"),
        Column::text("PASSENGER", "nome"),
        Column::text("CITY", "cidade"),
        Column::text("BOARDING", "local_embarque"),
    ]
}

/// One-line header for a manifest preview: driver, owner, head count, total fare
fn manifest_summary(manifesto: &Value) -> String {
    let field = |key: &str| {
        manifesto
            .get(key)
            .map(formatters::cell_text)
            .unwrap_or_else(|| formatters::EMPTY_CELL.to_string())
    };
    let total = manifesto
        .get("valor_total")
        .map(formatters::format_money)
        .unwrap_or_else(|| formatters::EMPTY_CELL.to_string());

    format!(
        "{} {} ({}) | {} passengers | {}",
        "Driver:".bold(),
        field("motorista_nome"),
        field("proprietario_nome"),
        field("total_passageiros"),
        total
    )
}

/// Run the viagem buscar-manifesto command
pub async fn buscar_manifesto(opts: &GlobalOptions, saida: &SaidaArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let manifesto = ctx.client.buscar_manifesto(&SaidaRequest::from(saida)).await?;

    let Some(passageiros) = manifesto.get("passageiros") else {
        return output::print(&manifesto, ctx.format, &manifest_columns());
    };

    match ctx.format {
        OutputFormat::Json => output::print(&manifesto, ctx.format, &manifest_columns()),
        OutputFormat::Table => output::print(passageiros, ctx.format, &manifest_columns()),
        OutputFormat::Pretty => {
            println!("{}", manifest_summary(&manifesto));
            output::print(passageiros, ctx.format, &manifest_columns())
        }
    }
}

/// Run the viagem registrar-saida command
pub async fn registrar_saida(opts: &GlobalOptions, saida: &SaidaArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let registered = ctx.client.registrar_saida(&SaidaRequest::from(saida)).await?;

    if ctx.format == OutputFormat::Pretty {
        if let Some(message) = registered.get("message").and_then(|m| m.as_str()) {
            println!("{} {}", "✓".green(), message);
        }
    }
    output::print(&registered, ctx.format, &[])
}

/// Run the viagem confirmar-saida command
pub async fn confirmar_saida(opts: &GlobalOptions, saida: &SaidaArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let confirmed = ctx.client.confirmar_saida(&SaidaRequest::from(saida)).await?;
    output::print(&confirmed, ctx.format, &[])
}

/// Run the viagem list command
pub async fn list(opts: &GlobalOptions, query: ViagemQuery) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let viagens = ctx.client.list_viagens(&query).await?;
    output::print(
        &viagens,
        ctx.format,
        &[
            Column::text("ID", "id"),
            Column::datetime("DATE", "data"),
            Column::text("TIME", "horario"),
            Column::text("DRIVER", "motorista_nome"),
            Column::text("OWNER", "proprietario_nome"),
            Column::text("PASSENGERS", "total_passageiros"),
        ],
    )
}

/// Run the viagem manifesto command
pub async fn manifesto(opts: &GlobalOptions, viagem_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let passageiros = ctx.client.get_manifesto(viagem_id).await?;
    output::print(&passageiros, ctx.format, &manifest_columns())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_summary() {
        colored::control::set_override(false);
        let manifesto = json!({
            "total_passageiros": 2,
            "valor_total": 70.0,
            "motorista_nome": "Carlos",
            "proprietario_nome": "Ana",
            "passageiros": []
        });

        assert_eq!(
            manifest_summary(&manifesto),
            "Driver: Carlos (Ana) | 2 passengers | R$ 70,00"
        );
    }

    #[test]
    fn test_manifest_summary_missing_fields() {
        colored::control::set_override(false);
        let summary = manifest_summary(&json!({}));
        assert!(summary.contains("- (-) | - passengers | -"));
    }
}
