//! Client for the Forge module registry REST API.
//!
//! Wraps the registry's module and release endpoints in typed, async service
//! methods. Every call is a single request/response exchange: no caching, no
//! retries, no background tasks.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL resolution, query encoding, headers, transport and
//! response classification all live here. Records and options come from
//! [`forge_types`] and are re-exported at the crate root.
//!
//! ## Request Flow
//!
//! ```text
//! service method -> ClientConfig::build_request -> Transport::execute
//!                -> check_response -> JSON decode -> typed result
//! ```
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `ClientConfig`, `ClientBuilder`, environment variables |
//! | [`transport`] | `Transport` trait and its `reqwest::Client` impl |
//! | [`error`] | `ForgeError` |
//! | `request` | Crate-internal request building (`ClientConfig::build_request`) |
//! | `response` | Status checking and body decoding |
//! | [`modules`] / [`releases`] | Resource services |
//!
//! ## Logging
//!
//! Emits `tracing` spans per operation and `debug` events per exchange. No
//! subscriber is installed; that is the application's decision. The API key
//! is never logged.

mod client;
pub mod config;
pub mod error;
pub mod modules;
pub mod releases;
mod request;
mod response;
pub mod transport;

pub use client::ForgeClient;
pub use config::{ClientBuilder, ClientConfig};
pub use error::{BoxError, ForgeError, Result};
pub use modules::ModulesService;
pub use releases::ReleasesService;
pub use transport::Transport;

// Re-export the domain types so callers need only one dependency.
pub use forge_types::{
    DeleteModuleParams, DeprecateModuleParams, Endorsement, ErrorResponse, GetModuleOptions,
    ListModulesOptions, ListReleasesOptions, Module, ModuleGroup, ModuleReference, ModuleSlug,
    Owner, Page, Pagination, QueryOptions, Release, ReleaseReference, SortOption,
};
