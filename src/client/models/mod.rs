//! Embuibe request and response models
//!
//! Most endpoints are consumed as untyped JSON payloads. The types here cover
//! request bodies, query strings and the login response the client inspects.

mod auth;
mod cliente;
mod passagem;
mod viagem;

pub use auth::{LoginRequest, LoginResponse, UsuarioPublic};
pub use cliente::{ClienteInput, ClienteQuery, ClienteUpdate};
pub use passagem::{FormaPagamento, NovaPassagem};
pub use viagem::{SaidaRequest, ViagemQuery};

/// Date format used in paths and query strings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Append percent-encoded query parameters to a path. No `?` is added when
/// there are no parameters.
pub fn with_query(path: &str, params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}
