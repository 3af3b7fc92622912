//! Customer API trait

use async_trait::async_trait;

use crate::client::http::Payload;
use crate::client::models::{ClienteInput, ClienteQuery, ClienteUpdate};
use crate::error::Result;

/// Customer operations
#[async_trait]
pub trait ClienteApi: Send + Sync {
    /// Search customers, paginated
    async fn list_clientes(&self, query: &ClienteQuery) -> Result<Payload>;

    async fn get_cliente(&self, id: i64) -> Result<Payload>;

    async fn create_cliente(&self, cliente: &ClienteInput) -> Result<Payload>;

    async fn update_cliente(&self, id: i64, update: &ClienteUpdate) -> Result<Payload>;

    /// Deactivate a customer (the backend keeps the record)
    async fn delete_cliente(&self, id: i64) -> Result<Payload>;
}
