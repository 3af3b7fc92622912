//! Ticket API trait

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::client::http::Payload;
use crate::client::models::NovaPassagem;
use crate::error::Result;

/// Ticket operations
#[async_trait]
pub trait PassagemApi: Send + Sync {
    /// Issue a ticket. The payload carries the ticket and its PDF in base64.
    async fn emitir_passagem(&self, passagem: &NovaPassagem) -> Result<Payload>;

    async fn get_passagem(&self, id: i64) -> Result<Payload>;

    /// Ticket PDF as raw bytes
    async fn get_passagem_pdf(&self, id: i64) -> Result<Vec<u8>>;

    /// Tickets sold for a travel date
    async fn list_passagens_dia(&self, data: NaiveDate) -> Result<Payload>;
}
