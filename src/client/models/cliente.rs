//! Customer (passenger) models

use serde::Serialize;

/// Body of `POST /clientes`
#[derive(Debug, Clone, Serialize)]
pub struct ClienteInput {
    pub nome: String,
    pub telefone: String,
    pub cidade: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}

/// Body of `PUT /clientes/{id}`. Only fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClienteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativo: Option<bool>,
}

impl ClienteUpdate {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.telefone.is_none()
            && self.endereco.is_none()
            && self.bairro.is_none()
            && self.cidade.is_none()
            && self.cep.is_none()
            && self.ativo.is_none()
    }
}

/// Search and paging for `GET /clientes`
#[derive(Debug, Clone, Default)]
pub struct ClienteQuery {
    /// Free-text search on name or phone
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ClienteQuery {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref q) = self.q {
            params.push(("q", q.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}
