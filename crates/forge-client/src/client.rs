//! The client handle and the state its services share.

use std::sync::Arc;

use reqwest::{Request, Response};
use tracing::debug;

use crate::config::{ClientBuilder, ClientConfig};
use crate::error::{ForgeError, Result};
use crate::modules::ModulesService;
use crate::releases::ReleasesService;
use crate::transport::Transport;

/// Configuration and transport shared by every service of one client.
pub(crate) struct ClientInner {
    pub(crate) config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl ClientInner {
    /// Hands `request` to the transport. Non-2xx responses are returned as-is.
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|source| ForgeError::Transport { source })?;

        debug!(%method, %url, status = response.status().as_u16(), "received response");
        Ok(response)
    }
}

/// A Forge registry client.
///
/// Cloning is cheap and every clone shares the same configuration and
/// transport. The client is never mutated after [`ClientBuilder::build`].
///
/// Requests are cancelled by dropping the future returned by a service
/// method; wrap it in `tokio::time::timeout` or configure
/// [`ClientBuilder::timeout`] to bound how long a call may take.
///
/// ```no_run
/// use forge_client::{Endorsement, ForgeClient, ListModulesOptions};
///
/// # async fn run() -> forge_client::Result<()> {
/// let client = ForgeClient::new()?;
/// let opts = ListModulesOptions {
///     limit: 100,
///     owner: "puppetlabs".into(),
///     endorsements: vec![Endorsement::Supported],
///     ..Default::default()
/// };
///
/// let page = client.modules().list_modules(Some(&opts)).await?;
/// for module in &page.results {
///     println!("{}", module.slug);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ForgeClient {
    inner: Arc<ClientInner>,
    modules: ModulesService,
    releases: ReleasesService,
}

impl ForgeClient {
    /// Creates a client with the default base URL, user agent and transport,
    /// and no API key.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Returns a builder for a customised client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let inner = Arc::new(ClientInner { config, transport });
        Self {
            modules: ModulesService::new(Arc::clone(&inner)),
            releases: ReleasesService::new(Arc::clone(&inner)),
            inner,
        }
    }

    /// The settings every request is built from.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Module endpoints (`modules`, `modules/{slug}`).
    pub fn modules(&self) -> &ModulesService {
        &self.modules
    }

    /// Release endpoints (`releases`).
    pub fn releases(&self) -> &ReleasesService {
        &self.releases
    }
}

impl std::fmt::Debug for ForgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgeClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
