//! Embuibe API client
//!
//! [`HttpClient`] owns the request pipeline (base URL, headers, status
//! classification). [`EmbuibeClient`] maps each backend capability onto it.

pub mod api;
pub mod base_url;
mod embuibe;
pub mod error_body;
pub mod http;
pub mod models;
pub mod navigation;
pub mod token;

pub use api::{AuthApi, CatalogoApi, ClienteApi, PassagemApi, RelatorioApi, ViagemApi};
pub use base_url::{BaseUrl, Origin};
pub use embuibe::EmbuibeClient;
pub use http::{HttpClient, Payload, RequestOptions};
pub use navigation::{Navigator, TerminalNavigator};
pub use token::{StorageTokenStore, TokenStore};

