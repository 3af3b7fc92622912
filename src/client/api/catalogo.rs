//! Reference data API trait

use async_trait::async_trait;

use crate::client::http::Payload;
use crate::error::Result;

/// Cities, boarding points and drivers
#[async_trait]
pub trait CatalogoApi: Send + Sync {
    async fn list_cidades(&self) -> Result<Payload>;

    /// Boarding points of one city
    async fn list_locais_by_cidade(&self, cidade_id: i64) -> Result<Payload>;

    async fn list_locais_embarque(&self) -> Result<Payload>;

    async fn list_motoristas(&self) -> Result<Payload>;

    async fn get_motorista(&self, id: i64) -> Result<Payload>;
}
