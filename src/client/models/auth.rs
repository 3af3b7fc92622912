//! Authentication models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub login: String,
    pub senha: String,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// The logged-in user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<UsuarioPublic>,

    /// Any other fields the backend sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public user data (no credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioPublic {
    pub id: i64,

    #[serde(default)]
    pub nome: String,

    /// `admin` or `atendente`
    #[serde(default)]
    pub tipo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_full() {
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "abc",
            "token_type": "bearer",
            "usuario": {"id": 1, "nome": "Ana Souza", "tipo": "admin"}
        }))
        .unwrap();

        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type.as_deref(), Some("bearer"));
        assert_eq!(response.usuario.unwrap().nome, "Ana Souza");
    }

    #[test]
    fn test_login_response_only_token_required() {
        let response: LoginResponse =
            serde_json::from_value(json!({"access_token": "abc", "expires_in": 3600})).unwrap();

        assert!(response.usuario.is_none());
        assert_eq!(response.extra["expires_in"], 3600);
    }

    #[test]
    fn test_login_response_missing_token() {
        let result = serde_json::from_value::<LoginResponse>(json!({"token_type": "bearer"}));
        assert!(result.is_err());
    }
}
