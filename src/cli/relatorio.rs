//! Report and dashboard commands
//!
//! Reports are nested summaries; table output derives its columns from the
//! top-level scalar fields.

use chrono::NaiveDate;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, DateRangeArgs};
use crate::client::RelatorioApi;
use crate::error::Result;
use crate::output;

/// Run the relatorio diario command
pub async fn diario(opts: &GlobalOptions, data: Option<NaiveDate>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let relatorio = ctx.client.relatorio_diario(data).await?;
    output::print(&relatorio, ctx.format, &[])
}

/// Run the relatorio periodo command
pub async fn periodo(opts: &GlobalOptions, range: &DateRangeArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let relatorio = ctx
        .client
        .relatorio_periodo(range.data_inicio, range.data_fim)
        .await?;
    output::print(&relatorio, ctx.format, &[])
}

/// Run the relatorio motorista command
pub async fn motorista(opts: &GlobalOptions, motorista_id: i64, range: &DateRangeArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let relatorio = ctx
        .client
        .relatorio_motorista(motorista_id, range.data_inicio, range.data_fim)
        .await?;
    output::print(&relatorio, ctx.format, &[])
}

/// Run the dashboard resumo command
pub async fn resumo(opts: &GlobalOptions, data: Option<NaiveDate>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let resumo = ctx.client.dashboard_resumo(data).await?;
    output::print(&resumo, ctx.format, &[])
}

/// Run the dashboard metricas command
pub async fn metricas(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let metricas = ctx.client.metricas_rapidas().await?;
    output::print(&metricas, ctx.format, &[])
}
