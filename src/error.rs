//! Error types for the Embuibe client

use thiserror::Error;

/// Result type alias for Embuibe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fallback message when an error body carries nothing readable
pub const GENERIC_REQUEST_MESSAGE: &str = "Erro na requisição";

/// Fallback message for a rejected login
pub const LOGIN_FAILED_MESSAGE: &str = "Erro ao fazer login";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors surfaced by the HTTP client.
///
/// The fixed messages are user-facing and match the backend's locale.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 from any authenticated call. The stored token has been cleared.
    #[error("Não autorizado")]
    Unauthorized,

    #[error("Recurso não encontrado")]
    NotFound,

    /// Any 5xx. Backend detail is never surfaced.
    #[error("Erro no servidor. Tente novamente mais tarde.")]
    ServerError,

    /// Any other non-success status, message derived from the error body
    #[error("{message}")]
    Request { status: u16, message: String },

    /// No response was received at all
    #[error("Erro de conexão. Verifique sua internet ou se o servidor está rodando.")]
    Connection,

    #[error("Requisição inválida: {0}")]
    InvalidRequest(String),

    #[error("Resposta inválida do servidor: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status that produced this error, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::NotFound => Some(404),
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            log::debug!("Transport failure: {}", err);
            ApiError::Connection
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `embuibe config set-origin <URL>` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid origin URL '{0}'")]
    InvalidOrigin(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Persistent storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}
