//! Release endpoints.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use forge_types::{ListReleasesOptions, Page, QueryOptions, Release};

use crate::client::ClientInner;
use crate::error::Result;
use crate::response::{check_response, decode_json};

const RELEASES_ENDPOINT: &str = "releases";

/// Operations on `releases`.
///
/// Obtained from [`ForgeClient::releases`](crate::ForgeClient::releases).
#[derive(Clone)]
pub struct ReleasesService {
    client: Arc<ClientInner>,
}

impl ReleasesService {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Lists module releases matching `options`, one page at a time. All
    /// filters are optional.
    ///
    /// <https://forgeapi.puppet.com/#operation/getReleases>
    #[instrument(skip_all)]
    pub async fn list_releases(
        &self,
        options: Option<&ListReleasesOptions>,
    ) -> Result<Page<Release>> {
        let request = self.client.config.build_request::<()>(
            Method::GET,
            RELEASES_ENDPOINT,
            None,
            options.map(|o| o as &dyn QueryOptions),
        )?;

        let response = check_response(self.client.send(request).await?).await?;
        decode_json(response).await
    }
}

impl std::fmt::Debug for ReleasesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleasesService").finish_non_exhaustive()
    }
}
