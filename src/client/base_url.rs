//! API base URL resolution
//!
//! The client behaves as if loaded from a page origin. The base URL is derived
//! from that origin once and reused for every request the client makes.

use std::fmt;

use reqwest::Url;

use crate::error::{ApiError, ConfigError};

/// Port the backend listens on in development
pub const BACKEND_PORT: u16 = 8000;

/// Port the frontend dev server listens on
pub const FRONTEND_DEV_PORT: u16 = 3000;

/// Path prefix of every API route
pub const API_PREFIX: &str = "/api/v1";

/// Base URL override baked in at build time
pub const BUILD_API_URL: Option<&str> = option_env!("EMBUIBE_API_URL");

/// The page origin the client runs under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scheme: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub path: String,
}

impl Origin {
    /// Parse an origin from a full page URL (e.g. `http://192.168.1.5:3000/dashboard.html`)
    pub fn parse(input: &str) -> std::result::Result<Self, ConfigError> {
        let url = Url::parse(input).map_err(|_| ConfigError::InvalidOrigin(input.to_string()))?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            hostname: url.host_str().unwrap_or_default().to_string(),
            port: url.port(),
            path: url.path().to_string(),
        })
    }

    /// Whether the page was loaded from the local filesystem
    pub fn is_local_file(&self) -> bool {
        self.scheme == "file"
    }

    /// `scheme://host[:port]` without any path
    pub fn root(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.hostname, port),
            None => format!("{}://{}", self.scheme, self.hostname),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root(), self.path)
    }
}

/// Compute the API root for a page origin.
///
/// First matching rule wins:
/// 1. `file:` origins talk to the local backend
/// 2. an explicit override is returned verbatim
/// 3. the frontend dev port maps to the backend port on the same host
/// 4. otherwise same-origin deployment, relative `/api/v1`
pub fn resolve_base_url(origin: &Origin, api_override: Option<&str>) -> String {
    if origin.is_local_file() {
        return format!("http://localhost:{}{}", BACKEND_PORT, API_PREFIX);
    }

    if let Some(url) = api_override {
        return url.to_string();
    }

    if origin.port == Some(FRONTEND_DEV_PORT) {
        return format!("http://{}:{}{}", origin.hostname, BACKEND_PORT, API_PREFIX);
    }

    API_PREFIX.to_string()
}

/// A base URL resolved once for a given origin
#[derive(Debug, Clone)]
pub struct BaseUrl {
    origin: Origin,
    resolved: String,
}

impl BaseUrl {
    /// Resolve and memoize the base URL for `origin`
    pub fn resolve(origin: Origin, api_override: Option<&str>) -> Self {
        let resolved = resolve_base_url(&origin, api_override.or(BUILD_API_URL));
        log::debug!("Resolved API base URL {} for origin {}", resolved, origin);
        Self { origin, resolved }
    }

    /// The resolved base, possibly relative
    pub fn as_str(&self) -> &str {
        &self.resolved
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Absolute URL for an API path. A relative base is resolved against the
    /// page origin the way a browser resolves a same-origin fetch.
    pub fn join(&self, path: &str) -> std::result::Result<Url, ApiError> {
        let full = format!("{}{}", self.resolved, path);
        let absolute = if full.starts_with('/') {
            format!("{}{}", self.origin.root(), full)
        } else {
            full
        };

        Url::parse(&absolute).map_err(|e| ApiError::InvalidRequest(format!("{}: {}", absolute, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(url: &str) -> Origin {
        Origin::parse(url).unwrap()
    }

    #[test]
    fn test_local_file_uses_localhost_backend() {
        let o = origin("file:///home/user/frontend/index.html");
        assert!(o.is_local_file());
        assert_eq!(
            resolve_base_url(&o, None),
            "http://localhost:8000/api/v1"
        );
    }

    #[test]
    fn test_local_file_wins_over_override() {
        let o = origin("file:///srv/index.html");
        assert_eq!(
            resolve_base_url(&o, Some("https://api.example.com/api/v1")),
            "http://localhost:8000/api/v1"
        );
    }

    #[test]
    fn test_override_returned_verbatim() {
        let o = origin("http://localhost:3000/");
        assert_eq!(
            resolve_base_url(&o, Some("https://api.example.com/api/v1")),
            "https://api.example.com/api/v1"
        );
    }

    #[test]
    fn test_dev_port_uses_current_hostname() {
        let o = origin("http://192.168.1.5:3000/passagens.html");
        assert_eq!(
            resolve_base_url(&o, None),
            "http://192.168.1.5:8000/api/v1"
        );
    }

    #[test]
    fn test_same_origin_is_relative() {
        assert_eq!(resolve_base_url(&origin("https://embuibe.com.br/"), None), "/api/v1");
        assert_eq!(resolve_base_url(&origin("http://localhost:8080/"), None), "/api/v1");
    }

    #[test]
    fn test_origin_parse_components() {
        let o = origin("http://192.168.1.5:3000/dashboard.html");
        assert_eq!(o.scheme, "http");
        assert_eq!(o.hostname, "192.168.1.5");
        assert_eq!(o.port, Some(3000));
        assert_eq!(o.path, "/dashboard.html");
        assert_eq!(o.root(), "http://192.168.1.5:3000");
    }

    #[test]
    fn test_origin_parse_default_port_is_none() {
        let o = origin("https://embuibe.com.br/index.html");
        assert_eq!(o.port, None);
        assert_eq!(o.to_string(), "https://embuibe.com.br/index.html");
    }

    #[test]
    fn test_origin_parse_invalid() {
        assert!(Origin::parse("not a url").is_err());
    }

    #[test]
    fn test_join_relative_base_uses_origin() {
        let base = BaseUrl::resolve(origin("https://embuibe.com.br/"), Some("/api/v1"));
        let url = base.join("/clientes?page=1").unwrap();
        assert_eq!(url.as_str(), "https://embuibe.com.br/api/v1/clientes?page=1");
    }

    #[test]
    fn test_join_absolute_base() {
        let base = BaseUrl::resolve(origin("http://10.0.0.2:3000/"), None);
        assert_eq!(base.as_str(), "http://10.0.0.2:8000/api/v1");
        let url = base.join("/cidades").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.2:8000/api/v1/cidades");
    }
}
