//! HTTP client for the Embuibe backend
//!
//! Every call composes `base URL + path`, attaches the standard headers, sends
//! the request and classifies the response:
//!
//! - `401` clears the session token and returns to the landing page
//! - `404` and `5xx` map to fixed messages, whatever the body says
//! - other failures take their message from the error body
//! - transport failures become [`ApiError::Connection`]
//!
//! Nothing is retried and nothing is cached.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::base_url::BaseUrl;
use super::error_body::ErrorBody;
use super::navigation::{LANDING_PAGE, Navigator, is_landing_page};
use super::token::TokenStore;
use crate::error::{ApiError, GENERIC_REQUEST_MESSAGE, Result};

/// A parsed JSON response. `Value::Null` stands for an absent or unparseable body.
pub type Payload = Value;

/// Per-call options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Attach the bearer token when one is stored
    pub auth: bool,
    /// Extra headers, applied last so they win on collision
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            auth: true,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not attach the bearer token
    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }

    /// Add or override a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A request as described by the caller. Built once, never mutated after sending.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    options: RequestOptions,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// Attach a JSON body
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

/// Parse a response body, degrading to `Value::Null` rather than failing
pub fn parse_payload(body: &[u8]) -> Payload {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        log::debug!("Response body is not JSON ({}), treating as empty", e);
        Value::Null
    })
}

/// HTTP client with token-based authentication
#[derive(Clone)]
pub struct HttpClient {
    http: ReqwestClient,
    base_url: BaseUrl,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    /// Create a client bound to a resolved base URL, token store and navigator
    pub fn new(
        base_url: BaseUrl,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = ReqwestClient::builder()
            .user_agent(concat!("embuibe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            tokens,
            navigator,
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Build the headers for a call: JSON content type, bearer token when
    /// `auth` is set and a token is stored, then caller overrides.
    pub fn build_headers(&self, options: &RequestOptions) -> std::result::Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if options.auth {
            if let Some(token) = self.tokens.get() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::InvalidRequest(format!("token: {}", e)))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidRequest(format!("header {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidRequest(format!("header {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Send a request and return the raw status and body, unclassified
    pub async fn send(&self, request: &ApiRequest) -> Result<(StatusCode, Vec<u8>)> {
        let url = self.base_url.join(&request.path)?;
        let headers = self.build_headers(&request.options)?;

        log::debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(headers);

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;

        log::debug!("{} {} -> {}", request.method, request.path, status);

        Ok((status, body.to_vec()))
    }

    /// Send a request and return its JSON payload
    pub async fn request(&self, request: ApiRequest) -> Result<Payload> {
        let (status, body) = self.send(&request).await?;
        self.check_status(status, &body)?;
        Ok(parse_payload(&body))
    }

    /// Send a request and return the raw body bytes on success
    pub async fn download(&self, path: &str, options: RequestOptions) -> Result<Vec<u8>> {
        let request = ApiRequest::new(Method::GET, path).options(options);
        let (status, body) = self.send(&request).await?;
        self.check_status(status, &body)?;
        Ok(body)
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Payload> {
        self.request(ApiRequest::new(Method::GET, path).options(options))
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<Payload> {
        let body = serde_json::to_value(body)?;
        self.request(ApiRequest::new(Method::POST, path).body(body).options(options))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<Payload> {
        let body = serde_json::to_value(body)?;
        self.request(ApiRequest::new(Method::PUT, path).body(body).options(options))
            .await
    }

    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<Payload> {
        self.request(ApiRequest::new(Method::DELETE, path).options(options))
            .await
    }

    /// Classify a response status, in order: 401, 404, 5xx, other failures
    fn check_status(&self, status: StatusCode, body: &[u8]) -> std::result::Result<(), ApiError> {
        match status {
            StatusCode::UNAUTHORIZED => {
                self.end_session();
                Err(ApiError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if status.is_server_error() => Err(ApiError::ServerError),
            status if status.is_success() => Ok(()),
            status => {
                let payload = parse_payload(body);
                Err(ApiError::Request {
                    status: status.as_u16(),
                    message: ErrorBody::from_payload(&payload).message_or(GENERIC_REQUEST_MESSAGE),
                })
            }
        }
    }

    /// Drop the token and leave for the landing page unless already there
    fn end_session(&self) {
        log::warn!("Session rejected by the server, clearing token");
        self.tokens.clear();

        let current = self.navigator.current_path();
        if !is_landing_page(&current) {
            self.navigator.navigate(LANDING_PAGE);
        }
    }
}
