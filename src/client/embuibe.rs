//! Embuibe API client implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;

use super::api::{AuthApi, CatalogoApi, ClienteApi, PassagemApi, RelatorioApi, ViagemApi};
use super::http::{ApiRequest, HttpClient, Payload, RequestOptions, parse_payload};
use super::models::{
    ClienteInput, ClienteQuery, ClienteUpdate, DATE_FORMAT, LoginRequest, LoginResponse,
    NovaPassagem, SaidaRequest, ViagemQuery, with_query,
};
use super::error_body::ErrorBody;
use super::navigation::LANDING_PAGE;
use crate::error::{ApiError, LOGIN_FAILED_MESSAGE, Result};

/// One method per backend capability, all delegating to [`HttpClient`]
#[derive(Clone)]
pub struct EmbuibeClient {
    http: HttpClient,
}

impl EmbuibeClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    async fn get(&self, path: &str) -> Result<Payload> {
        self.http.get(path, RequestOptions::default()).await
    }
}

fn date_param(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[async_trait]
impl AuthApi for EmbuibeClient {
    async fn login(&self, login: &str, senha: &str) -> Result<LoginResponse> {
        let body = serde_json::to_value(LoginRequest {
            login: login.to_string(),
            senha: senha.to_string(),
        })?;
        let request = ApiRequest::new(Method::POST, "/auth/login")
            .body(body)
            .options(RequestOptions::new().without_auth());

        // A rejected login is not a lost session: no token clearing, no redirect
        let (status, bytes) = self.http.send(&request).await?;
        if !status.is_success() {
            let payload = parse_payload(&bytes);
            return Err(ApiError::Request {
                status: status.as_u16(),
                message: ErrorBody::from_payload(&payload).message_or(LOGIN_FAILED_MESSAGE),
            }
            .into());
        }

        let response: LoginResponse = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        self.http.tokens().set(&response.access_token);
        log::info!(
            "Logged in as {}",
            response
                .usuario
                .as_ref()
                .map(|u| u.nome.as_str())
                .unwrap_or(login)
        );

        Ok(response)
    }

    async fn me(&self) -> Result<Payload> {
        self.get("/auth/me").await
    }

    fn logout(&self) {
        self.http.tokens().clear();
        self.http.navigator().navigate(LANDING_PAGE);
    }

    async fn health(&self) -> Result<Payload> {
        self.http
            .get("/health", RequestOptions::new().without_auth())
            .await
    }
}

#[async_trait]
impl ClienteApi for EmbuibeClient {
    async fn list_clientes(&self, query: &ClienteQuery) -> Result<Payload> {
        self.get(&with_query("/clientes", &query.to_query_params()))
            .await
    }

    async fn get_cliente(&self, id: i64) -> Result<Payload> {
        self.get(&format!("/clientes/{}", id)).await
    }

    async fn create_cliente(&self, cliente: &ClienteInput) -> Result<Payload> {
        self.http
            .post("/clientes", cliente, RequestOptions::default())
            .await
    }

    async fn update_cliente(&self, id: i64, update: &ClienteUpdate) -> Result<Payload> {
        self.http
            .put(&format!("/clientes/{}", id), update, RequestOptions::default())
            .await
    }

    async fn delete_cliente(&self, id: i64) -> Result<Payload> {
        self.http
            .delete(&format!("/clientes/{}", id), RequestOptions::default())
            .await
    }
}

#[async_trait]
impl CatalogoApi for EmbuibeClient {
    async fn list_cidades(&self) -> Result<Payload> {
        self.get("/cidades").await
    }

    async fn list_locais_by_cidade(&self, cidade_id: i64) -> Result<Payload> {
        self.get(&format!("/cidades/{}/locais", cidade_id)).await
    }

    async fn list_locais_embarque(&self) -> Result<Payload> {
        self.get("/locais-embarque").await
    }

    async fn list_motoristas(&self) -> Result<Payload> {
        self.get("/motoristas").await
    }

    async fn get_motorista(&self, id: i64) -> Result<Payload> {
        self.get(&format!("/motoristas/{}", id)).await
    }
}

#[async_trait]
impl PassagemApi for EmbuibeClient {
    async fn emitir_passagem(&self, passagem: &NovaPassagem) -> Result<Payload> {
        self.http
            .post("/passagens", passagem, RequestOptions::default())
            .await
    }

    async fn get_passagem(&self, id: i64) -> Result<Payload> {
        self.get(&format!("/passagens/{}", id)).await
    }

    async fn get_passagem_pdf(&self, id: i64) -> Result<Vec<u8>> {
        self.http
            .download(
                &format!("/passagens/{}/pdf", id),
                RequestOptions::new().header("Accept", "application/pdf"),
            )
            .await
    }

    async fn list_passagens_dia(&self, data: NaiveDate) -> Result<Payload> {
        self.get(&format!("/passagens/dia/{}", date_param(data)))
            .await
    }
}

#[async_trait]
impl ViagemApi for EmbuibeClient {
    async fn buscar_manifesto(&self, saida: &SaidaRequest) -> Result<Payload> {
        self.http
            .post("/viagens/buscar-manifesto", saida, RequestOptions::default())
            .await
    }

    async fn registrar_saida(&self, saida: &SaidaRequest) -> Result<Payload> {
        self.http
            .post("/viagens/registrar-saida", saida, RequestOptions::default())
            .await
    }

    async fn confirmar_saida(&self, saida: &SaidaRequest) -> Result<Payload> {
        self.http
            .post("/viagens/confirmar-saida", saida, RequestOptions::default())
            .await
    }

    async fn list_viagens(&self, query: &ViagemQuery) -> Result<Payload> {
        self.get(&with_query("/viagens/listar", &query.to_query_params()))
            .await
    }

    async fn get_manifesto(&self, viagem_id: i64) -> Result<Payload> {
        self.get(&format!("/viagens/{}/manifesto", viagem_id))
            .await
    }
}

#[async_trait]
impl RelatorioApi for EmbuibeClient {
    async fn relatorio_diario(&self, data: Option<NaiveDate>) -> Result<Payload> {
        let params: Vec<_> = data.map(|d| ("data", date_param(d))).into_iter().collect();
        self.get(&with_query("/relatorios/diario", &params)).await
    }

    async fn relatorio_periodo(
        &self,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
    ) -> Result<Payload> {
        let params = [
            ("data_inicio", date_param(data_inicio)),
            ("data_fim", date_param(data_fim)),
        ];
        self.get(&with_query("/relatorios/periodo", &params)).await
    }

    async fn relatorio_motorista(
        &self,
        motorista_id: i64,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
    ) -> Result<Payload> {
        let params = [
            ("data_inicio", date_param(data_inicio)),
            ("data_fim", date_param(data_fim)),
        ];
        self.get(&with_query(
            &format!("/relatorios/motorista/{}", motorista_id),
            &params,
        ))
        .await
    }

    async fn dashboard_resumo(&self, data: Option<NaiveDate>) -> Result<Payload> {
        let params: Vec<_> = data.map(|d| ("data", date_param(d))).into_iter().collect();
        self.get(&with_query("/dashboard/resumo", &params)).await
    }

    async fn metricas_rapidas(&self) -> Result<Payload> {
        self.get("/dashboard/metricas-rapidas").await
    }
}
