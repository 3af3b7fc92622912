//! Ticket commands

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use chrono::NaiveDate;
use colored::Colorize;
use serde_json::Value;

use crate::cli::{CommandContext, OutputFormat};
use crate::cli::args::GlobalOptions;
use crate::client::PassagemApi;
use crate::client::models::NovaPassagem;
use crate::error::{ApiError, Result};
use crate::output::{self, Column};

fn columns() -> Vec<Column> {
    vec![
        Column::text("ID", "id"),
        Column::text("NUMBER", "numero"),
        Column::text("PASSENGER", "cliente_nome"),
        Column::datetime("DATE", "data_viagem"),
        Column::text("TIME", "horario"),
        Column::money("FARE", "valor"),
        Column::text("STATUS", "status"),
    ]
}

/// Decode the `pdf_base64` field of an issued ticket
fn decode_pdf(emitted: &Value) -> Result<Vec<u8>> {
    let encoded = emitted
        .get("pdf_base64")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::InvalidResponse("missing pdf_base64".to_string()))?;

    general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ApiError::InvalidResponse(format!("invalid pdf_base64: {}", e)).into())
}

fn write_pdf(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    println!(
        "{} PDF saved to {} ({} bytes)",
        "✓".green(),
        path.display().to_string().cyan(),
        bytes.len()
    );
    Ok(())
}

/// Run the passagem emitir command
pub async fn emitir(opts: &GlobalOptions, passagem: NovaPassagem, pdf: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let emitted = ctx.client.emitir_passagem(&passagem).await?;

    if ctx.format == OutputFormat::Json {
        output::print(&emitted, ctx.format, &columns())?;
    } else {
        let ticket = emitted.get("passagem").unwrap_or(&Value::Null);
        output::print(ticket, ctx.format, &columns())?;
    }

    if let Some(path) = pdf {
        write_pdf(Path::new(&path), &decode_pdf(&emitted)?)?;
    }

    Ok(())
}

/// Run the passagem get command
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let passagem = ctx.client.get_passagem(id).await?;
    output::print(&passagem, ctx.format, &columns())
}

/// Run the passagem pdf command
pub async fn pdf(opts: &GlobalOptions, id: i64, output: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let bytes = ctx.client.get_passagem_pdf(id).await?;

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("passagem-{}.pdf", id)));
    write_pdf(&path, &bytes)
}

/// Run the passagem dia command
pub async fn dia(opts: &GlobalOptions, data: NaiveDate) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let passagens = ctx.client.list_passagens_dia(data).await?;
    output::print(&passagens, ctx.format, &columns())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_decode_pdf() {
        let emitted = json!({"passagem": {"id": 1}, "pdf_base64": "JVBERi0xLjQ="});
        assert_eq!(decode_pdf(&emitted).unwrap(), b"%PDF-1.4".to_vec());
    }

    #[test]
    fn test_decode_pdf_missing_or_invalid() {
        assert!(decode_pdf(&json!({"passagem": {}})).is_err());
        assert!(decode_pdf(&json!({"pdf_base64": "***"})).is_err());
    }

    #[test]
    fn test_write_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ticket.pdf");

        write_pdf(&path, b"%PDF-1.4").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4".to_vec());
    }
}
