//! Authentication API trait

use async_trait::async_trait;

use crate::client::http::Payload;
use crate::client::models::LoginResponse;
use crate::error::Result;

/// Session operations for the Embuibe API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token and store it
    async fn login(&self, login: &str, senha: &str) -> Result<LoginResponse>;

    /// The current user
    async fn me(&self) -> Result<Payload>;

    /// Forget the token and return to the landing page
    fn logout(&self);

    /// Backend health check. Sent without a token.
    async fn health(&self) -> Result<Payload>;
}
