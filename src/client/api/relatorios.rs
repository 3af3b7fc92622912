//! Reports and dashboard API trait

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::client::http::Payload;
use crate::error::Result;

/// Reports and dashboard figures
#[async_trait]
pub trait RelatorioApi: Send + Sync {
    /// Daily report. The backend defaults to today when `data` is absent.
    async fn relatorio_diario(&self, data: Option<NaiveDate>) -> Result<Payload>;

    async fn relatorio_periodo(&self, data_inicio: NaiveDate, data_fim: NaiveDate)
    -> Result<Payload>;

    async fn relatorio_motorista(
        &self,
        motorista_id: i64,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
    ) -> Result<Payload>;

    async fn dashboard_resumo(&self, data: Option<NaiveDate>) -> Result<Payload>;

    async fn metricas_rapidas(&self) -> Result<Payload>;
}
