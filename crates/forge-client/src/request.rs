//! Turns a method, relative path, optional body and optional query options
//! into a ready-to-send [`reqwest::Request`].
//!
//! Nothing here performs I/O. The resulting request carries every header the
//! registry expects and can be handed to any [`crate::Transport`].

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request};
use serde::Serialize;

use forge_types::QueryOptions;

use crate::config::ClientConfig;
use crate::error::{ForgeError, Result};

impl ClientConfig {
    /// Builds a request for `path`, resolved against the base URL.
    ///
    /// `path` is relative and must not start with `/`, otherwise it would
    /// replace the base URL's path. When `options` is given, its non-default
    /// fields become the query string. When `body` is given, it is sent as
    /// JSON with `<`, `>` and `&` left unescaped.
    ///
    /// # Errors
    ///
    /// - [`ForgeError::Configuration`] if the base URL has no trailing slash,
    ///   `path` cannot be resolved, or a header value is invalid.
    /// - [`ForgeError::Encoding`] if `body` cannot be serialised.
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&dyn QueryOptions>,
    ) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        if !self.trailing_slash {
            return Err(ForgeError::configuration(format!(
                "base URL must have a trailing slash, but {:?} does not",
                self.base_url.as_str()
            )));
        }

        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ForgeError::configuration(format!("invalid request path {path:?}: {e}")))?;

        if let Some(options) = options {
            let pairs = options.query_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        let mut request = Request::new(method, url);

        if let Some(body) = body {
            // serde_json never escapes HTML-sensitive characters.
            let bytes = serde_json::to_vec(body).map_err(|source| ForgeError::Encoding { source })?;
            *request.body_mut() = Some(bytes.into());
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(api_key) = &self.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
                ForgeError::configuration("API key contains characters not allowed in a header")
            })?;
            value.set_sensitive(true);
            request.headers_mut().insert(AUTHORIZATION, value);
        }

        if !self.user_agent.is_empty() {
            let value = HeaderValue::from_str(&self.user_agent).map_err(|_| {
                ForgeError::configuration(format!("invalid user agent {:?}", self.user_agent))
            })?;
            request.headers_mut().insert(USER_AGENT, value);
        }

        *request.timeout_mut() = self.timeout;

        Ok(request)
    }
}
