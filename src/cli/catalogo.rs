//! City, boarding point and driver commands

use serde_json::{Value, json};

use crate::cli::{CommandContext, OutputFormat};
use crate::cli::args::GlobalOptions;
use crate::client::CatalogoApi;
use crate::error::Result;
use crate::output::{self, Column};

fn local_columns() -> Vec<Column> {
    vec![
        Column::text("ID", "id"),
        Column::text("CITY", "cidade"),
        Column::text("NAME", "nome"),
        Column::money("FARE", "valor"),
    ]
}

fn motorista_columns() -> Vec<Column> {
    vec![
        Column::text("ID", "id"),
        Column::text("NAME", "nome"),
        Column::text("SEATS", "vagas"),
        Column::text("OWNER", "proprietario.nome"),
        Column::text("ACTIVE", "ativo"),
    ]
}

/// Flatten `[{cidade, locais: [...]}, ...]` into one row per boarding point
fn flatten_locais(grouped: &Value) -> Value {
    let rows = grouped
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|group| {
            let cidade = group.get("cidade").and_then(|c| c.get("nome")).cloned();
            group
                .get("locais")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .map(move |local| {
                    json!({
                        "id": local.get("id"),
                        "cidade": cidade,
                        "nome": local.get("nome"),
                        "valor": local.get("valor"),
                    })
                })
        })
        .collect();

    Value::Array(rows)
}

/// Run the cidade list command
pub async fn cidades(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cidades = ctx.client.list_cidades().await?;
    output::print(
        &cidades,
        ctx.format,
        &[
            Column::text("ID", "id"),
            Column::text("NAME", "nome"),
            Column::text("ORDER", "ordem"),
        ],
    )
}

/// Run the cidade locais command
pub async fn locais_by_cidade(opts: &GlobalOptions, cidade_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let locais = ctx.client.list_locais_by_cidade(cidade_id).await?;
    output::print(
        &locais,
        ctx.format,
        &[
            Column::text("ID", "id"),
            Column::text("NAME", "nome"),
            Column::money("FARE", "valor"),
            Column::text("ACTIVE", "ativo"),
        ],
    )
}

/// Run the local list command
pub async fn locais(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let grouped = ctx.client.list_locais_embarque().await?;

    if ctx.format == OutputFormat::Json {
        return output::print(&grouped, ctx.format, &[]);
    }
    output::print(&flatten_locais(&grouped), ctx.format, &local_columns())
}

/// Run the motorista list command
pub async fn motoristas(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let motoristas = ctx.client.list_motoristas().await?;
    output::print(&motoristas, ctx.format, &motorista_columns())
}

/// Run the motorista get command
pub async fn motorista(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let motorista = ctx.client.get_motorista(id).await?;
    output::print(&motorista, ctx.format, &motorista_columns())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_locais() {
        let grouped = json!([
            {
                "cidade": {"id": 1, "nome": "Embu-Guaçu", "ordem": 1},
                "locais": [
                    {"id": 10, "nome": "Rodoviária", "valor": 12.5},
                    {"id": 11, "nome": "Praça", "valor": 12.5}
                ]
            },
            {"cidade": {"id": 2, "nome": "Itapecerica", "ordem": 2}, "locais": []}
        ]);

        let rows = flatten_locais(&grouped);
        let rows = rows.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["cidade"], "Embu-Guaçu");
        assert_eq!(rows[1]["nome"], "Praça");
    }

    #[test]
    fn test_flatten_locais_unexpected_shape() {
        assert_eq!(flatten_locais(&json!({"detail": "x"})), json!([]));
    }
}
