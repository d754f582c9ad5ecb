//! Module endpoints.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use forge_types::{
    DeleteModuleParams, DeprecateModuleBody, DeprecateModuleParams, GetModuleOptions,
    ListModulesOptions, Module, ModuleSlug, Page, QueryOptions,
};

use crate::client::ClientInner;
use crate::error::Result;
use crate::response::{check_response, decode_json, expect_no_content};

const MODULES_ENDPOINT: &str = "modules";

fn module_path(slug: &ModuleSlug) -> String {
    format!("{MODULES_ENDPOINT}/{slug}")
}

/// Operations on `modules` and `modules/{slug}`.
///
/// Obtained from [`ForgeClient::modules`](crate::ForgeClient::modules).
#[derive(Clone)]
pub struct ModulesService {
    client: Arc<ClientInner>,
}

impl ModulesService {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Lists modules matching `options`, one page at a time.
    ///
    /// `None` sends no query string and returns the registry's first page
    /// with its default page size.
    ///
    /// <https://forgeapi.puppet.com/#operation/getModules>
    #[instrument(skip_all)]
    pub async fn list_modules(&self, options: Option<&ListModulesOptions>) -> Result<Page<Module>> {
        let request = self.client.config.build_request::<()>(
            Method::GET,
            MODULES_ENDPOINT,
            None,
            options.map(|o| o as &dyn QueryOptions),
        )?;

        let response = check_response(self.client.send(request).await?).await?;
        decode_json(response).await
    }

    /// Fetches a single module. `options` controls which fields are returned.
    ///
    /// <https://forgeapi.puppet.com/#operation/getModule>
    #[instrument(skip_all, fields(slug = %slug))]
    pub async fn get_module(&self, slug: &ModuleSlug, options: &GetModuleOptions) -> Result<Module> {
        let request = self.client.config.build_request::<()>(
            Method::GET,
            &module_path(slug),
            None,
            Some(options as &dyn QueryOptions),
        )?;

        let response = check_response(self.client.send(request).await?).await?;
        decode_json(response).await
    }

    /// Soft-deletes a module. The registry answers `204 No Content` on success.
    ///
    /// <https://forgeapi.puppet.com/#operation/deleteModule>
    #[instrument(skip_all, fields(slug = %slug))]
    pub async fn delete_module(&self, slug: &ModuleSlug, params: &DeleteModuleParams) -> Result<()> {
        let request = self.client.config.build_request::<()>(
            Method::DELETE,
            &module_path(slug),
            None,
            Some(params as &dyn QueryOptions),
        )?;

        expect_no_content(self.client.send(request).await?).await
    }

    /// Marks a module as deprecated, optionally naming its replacement. The
    /// registry answers `204 No Content` on success.
    ///
    /// <https://forgeapi.puppet.com/#tag/Module-Operations/operation/deprecateModule>
    #[instrument(skip_all, fields(slug = %slug))]
    pub async fn deprecate_module(
        &self,
        slug: &ModuleSlug,
        params: DeprecateModuleParams,
    ) -> Result<()> {
        let body = DeprecateModuleBody::from(params);
        let request = self.client.config.build_request(
            Method::PATCH,
            &module_path(slug),
            Some(&body),
            None,
        )?;

        expect_no_content(self.client.send(request).await?).await
    }
}

impl std::fmt::Debug for ModulesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModulesService").finish_non_exhaustive()
    }
}
