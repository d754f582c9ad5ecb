//! Domain types for the Forge module registry.
//!
//! This crate contains every record, enumerated value, identifier, options
//! struct and request body exchanged with the registry. The client crate
//! builds requests from these types and decodes responses into them.
//!
//! ## Architectural Layer
//!
//! **Domain.** This crate has no I/O dependencies. It defines *what* is sent
//! and received; `forge-client` defines *how* it travels.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Validated path identifiers (`ModuleSlug`) |
//! | [`types`] | Enumerated values (`SortOption`, `Endorsement`, `ModuleGroup`) |
//! | [`records`] | Response records (`Module`, `Release`, `Pagination`, `Page`) |
//! | [`options`] | Query options, their encoding, and request bodies |
//! | [`errors`] | Wire shape of registry error responses |

pub mod errors;
pub mod identifiers;
mod nullable;
pub mod options;
pub mod records;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::ErrorResponse;
pub use identifiers::ModuleSlug;
pub use options::{
    DeleteModuleParams, DeprecateModuleBody, DeprecateModuleParams, GetModuleOptions,
    ListModulesOptions, ListReleasesOptions, QueryOptions, DEPRECATE_ACTION,
};
pub use records::{
    Module, ModuleReference, Owner, Page, Pagination, Release, ReleaseReference,
};
pub use types::{Endorsement, ModuleGroup, SortOption};
