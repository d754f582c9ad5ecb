//! Client configuration and its builder.
//!
//! Defaults are associated constants rather than globals; the only way to
//! change them is through [`ClientBuilder`] before the client exists.
//!
//! ```no_run
//! use std::time::Duration;
//! use forge_client::ForgeClient;
//!
//! # fn main() -> forge_client::Result<()> {
//! let client = ForgeClient::builder()
//!     .user_agent("my-tool/1.2.0")
//!     .api_key("s3cr3t")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::client::ForgeClient;
use crate::error::{ForgeError, Result};
use crate::transport::Transport;

/// Environment variable holding the bearer token.
pub const ENV_API_KEY: &str = "FORGE_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "FORGE_BASE_URL";
/// Environment variable overriding the user agent.
pub const ENV_USER_AGENT: &str = "FORGE_USER_AGENT";

/// Immutable settings shared by every request a client builds.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL every relative path is resolved against. Must end with `/`.
    pub base_url: Url,
    /// Value of the `User-Agent` header; omitted when empty.
    pub user_agent: String,
    pub(crate) api_key: Option<String>,
    /// Per-request timeout attached to every request.
    pub timeout: Option<Duration>,
    /// Whether the base URL as written ends its path with `/`. Parsing
    /// normalises a host-only URL to path `/`, so this is taken beforehand.
    pub(crate) trailing_slash: bool,
}

impl ClientConfig {
    /// Default registry endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://forgeapi.puppet.com/v3/";
    /// Default `User-Agent` header value.
    pub const DEFAULT_USER_AGENT: &'static str = "go-forge-yourself/0.0.0";

    pub(crate) fn new(
        base_url: &str,
        user_agent: String,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| ForgeError::configuration(format!("invalid base URL {base_url:?}: {e}")))?;
        let path_end = base_url.find(&['?', '#'][..]).unwrap_or(base_url.len());

        Ok(Self {
            base_url: url,
            user_agent,
            api_key,
            timeout,
            trailing_slash: base_url[..path_end].ends_with('/'),
        })
    }

    /// Returns `true` if requests will carry an `Authorization` header.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

// Hand-written so the token never reaches logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builds a [`ForgeClient`].
///
/// Obtained from [`ForgeClient::builder`] or [`ClientBuilder::from_env`].
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Creates a builder with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from `FORGE_API_KEY`, `FORGE_BASE_URL` and
    /// `FORGE_USER_AGENT`. Unset or empty variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            base_url: get(ENV_BASE_URL),
            user_agent: get(ENV_USER_AGENT),
            api_key: get(ENV_API_KEY),
            ..Self::default()
        }
    }

    /// Overrides the base URL. It must end with a trailing slash; a URL
    /// without one is accepted here but every request will fail.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the bearer token sent as `Authorization: Bearer <token>`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Attaches a timeout to every request. An expired request fails with a
    /// [`ForgeError::Transport`] for which `is_timeout()` is `true`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default [`reqwest::Client`] transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Validates the settings and constructs the client.
    ///
    /// # Errors
    ///
    /// [`ForgeError::Configuration`] if the base URL cannot be parsed or the
    /// default transport cannot be initialised.
    pub fn build(self) -> Result<ForgeClient> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or(ClientConfig::DEFAULT_BASE_URL);
        let config = ClientConfig::new(
            raw,
            self.user_agent
                .unwrap_or_else(|| ClientConfig::DEFAULT_USER_AGENT.to_owned()),
            self.api_key,
            self.timeout,
        )?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(reqwest::Client::builder().build().map_err(|e| {
                ForgeError::configuration(format!("failed to initialise HTTP client: {e}"))
            })?),
        };

        Ok(ForgeClient::from_parts(config, transport))
    }
}
