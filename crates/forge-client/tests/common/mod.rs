//! Shared helpers for the integration tests.
//!
//! Each test starts its own mockito server so mocks never collide between
//! tests running in parallel.

#![allow(dead_code)]

use forge_client::{ForgeClient, ModuleSlug};
use mockito::{Server, ServerGuard};
use serde_json::{json, Value};

/// Routes `tracing` output through the test harness. Set `RUST_LOG=debug`
/// to see request/response events for a failing test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn mock_server() -> ServerGuard {
    init_tracing();
    Server::new_async().await
}

/// Base URL of `server` with the trailing slash the client requires.
pub fn base_url(server: &ServerGuard) -> String {
    format!("{}/", server.url())
}

pub fn client_for(server: &ServerGuard) -> ForgeClient {
    ForgeClient::builder()
        .base_url(base_url(server))
        .build()
        .unwrap()
}

pub fn slug(value: &str) -> ModuleSlug {
    ModuleSlug::new(value).unwrap()
}

pub fn module_json(slug: &str) -> Value {
    let (owner, name) = slug.split_once('-').unwrap();
    json!({
        "uri": format!("/v3/modules/{slug}"),
        "slug": slug,
        "name": name,
        "downloads": 1234,
        "created_at": "2010-05-20 22:43:19 -0700",
        "updated_at": "2024-01-16 08:17:54 -0800",
        "deprecated_at": null,
        "deprecated_for": null,
        "superseded_by": null,
        "endorsement": "supported",
        "module_group": "base",
        "premium": false,
        "owner": {
            "uri": format!("/v3/users/{owner}"),
            "slug": owner,
            "username": owner,
            "gravatar_id": null
        },
        "current_release": null,
        "releases": [],
        "feedback_score": null,
        "homepage_url": null,
        "issues_url": null
    })
}

pub fn release_json(slug: &str, version: &str) -> Value {
    let (owner, name) = slug.split_once('-').unwrap();
    json!({
        "uri": format!("/v3/releases/{slug}-{version}"),
        "slug": format!("{slug}-{version}"),
        "module": {
            "uri": format!("/v3/modules/{slug}"),
            "slug": slug,
            "name": name,
            "deprecated_at": null,
            "owner": {"uri": format!("/v3/users/{owner}"), "slug": owner, "username": owner}
        },
        "version": version,
        "metadata": {"name": slug, "version": version},
        "tags": [],
        "pdk": true,
        "file_size": 4096,
        "file_md5": "d41d8cd98f00b204e9800998ecf8427e",
        "downloads": 10,
        "pe_compatibility": null
    })
}

pub fn page_json(results: Vec<Value>, next: Option<&str>) -> String {
    json!({
        "pagination": {
            "limit": 20,
            "offset": 0,
            "first": "/v3/modules?limit=20&offset=0",
            "previous": null,
            "current": "/v3/modules?limit=20&offset=0",
            "next": next,
            "total": results.len()
        },
        "results": results
    })
    .to_string()
}

pub fn not_found_json() -> String {
    json!({"message": "404 Module not found", "errors": ["Module not found"]}).to_string()
}
