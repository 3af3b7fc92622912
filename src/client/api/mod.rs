//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - session and health
//! - [`ClienteApi`] - customers
//! - [`CatalogoApi`] - cities, boarding points and drivers
//! - [`PassagemApi`] - tickets
//! - [`ViagemApi`] - trips and manifests
//! - [`RelatorioApi`] - reports and dashboard
//!
//! [`EmbuibeClient`](super::EmbuibeClient) implements all of them.

mod auth;
mod catalogo;
mod clientes;
mod passagens;
mod relatorios;
mod viagens;

pub use auth::AuthApi;
pub use catalogo::CatalogoApi;
pub use clientes::ClienteApi;
pub use passagens::PassagemApi;
pub use relatorios::RelatorioApi;
pub use viagens::ViagemApi;
