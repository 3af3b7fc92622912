//! Trip API trait

use async_trait::async_trait;

use crate::client::http::Payload;
use crate::client::models::{SaidaRequest, ViagemQuery};
use crate::error::Result;

/// Trip and manifest operations
#[async_trait]
pub trait ViagemApi: Send + Sync {
    /// Passenger manifest for a departure that has not been registered yet
    async fn buscar_manifesto(&self, saida: &SaidaRequest) -> Result<Payload>;

    async fn registrar_saida(&self, saida: &SaidaRequest) -> Result<Payload>;

    async fn confirmar_saida(&self, saida: &SaidaRequest) -> Result<Payload>;

    async fn list_viagens(&self, query: &ViagemQuery) -> Result<Payload>;

    /// Manifest of a registered trip
    async fn get_manifesto(&self, viagem_id: i64) -> Result<Payload>;
}
