//! The seam between request building and the network.
//!
//! [`ForgeClient`](crate::ForgeClient) never talks to a socket directly; it
//! hands a fully built [`reqwest::Request`] to a [`Transport`]. The default
//! transport is a plain [`reqwest::Client`]. Supply your own through
//! [`ClientBuilder::transport`](crate::ClientBuilder::transport) to customise
//! TLS, proxies or connection pooling, or to substitute a test double.

use async_trait::async_trait;

use crate::error::BoxError;

/// Executes one HTTP request and returns the raw response.
///
/// Implementations must not inspect the status code; non-2xx responses are
/// returned as `Ok` and classified by the client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        reqwest::Client::execute(self, request)
            .await
            .map_err(BoxError::from)
    }
}
