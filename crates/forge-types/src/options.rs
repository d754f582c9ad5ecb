//! Per-operation query options and request bodies.
//!
//! Options structs are plain data with `Default`; callers set the fields they
//! need and leave the rest at their zero value:
//!
//! ```
//! use forge_types::{Endorsement, ListModulesOptions, QueryOptions};
//!
//! let opts = ListModulesOptions {
//!     limit: 100,
//!     owner: "puppetlabs".into(),
//!     endorsements: vec![Endorsement::Supported],
//!     ..Default::default()
//! };
//! assert_eq!(opts.query_pairs().len(), 3);
//! ```
//!
//! ## Encoding rules
//!
//! - Zero numbers, `false` flags, empty strings, empty lists and `None` enums
//!   are omitted.
//! - Scalars produce exactly one `(name, value)` pair.
//! - Lists produce one pair per element under the same name
//!   (`endorsements=supported&endorsements=partner`).
//! - Pairs come back sorted by name so URLs are deterministic.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Endorsement, ModuleGroup, SortOption};

/// Converts an options struct into query-string pairs.
pub trait QueryOptions {
    /// Returns the `(parameter, value)` pairs for every non-default field.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

// ---------------------------------------------------------------------------
// Pair accumulator
// ---------------------------------------------------------------------------

#[derive(Default)]
struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    fn number(&mut self, name: &'static str, value: u32) {
        if value != 0 {
            self.0.push((name, value.to_string()));
        }
    }

    fn flag(&mut self, name: &'static str, value: bool) {
        if value {
            self.0.push((name, "true".to_owned()));
        }
    }

    fn text(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.0.push((name, value.to_owned()));
        }
    }

    fn value<T: Display>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(v) = value {
            self.0.push((name, v.to_string()));
        }
    }

    fn list<T: Display>(&mut self, name: &'static str, values: &[T]) {
        self.0.extend(values.iter().map(|v| (name, v.to_string())));
    }

    fn finish(mut self) -> Vec<(&'static str, String)> {
        // Stable: repeated list elements keep their order.
        self.0.sort_by_key(|(name, _)| *name);
        self.0
    }
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

/// Filters and paging for `GET modules`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModulesOptions {
    pub limit: u32,
    pub offset: u32,
    pub sort_by: Option<SortOption>,
    pub tag: String,
    pub owner: String,
    pub with_tasks: bool,
    pub with_plans: bool,
    pub with_pdk: bool,
    pub premium: bool,
    pub exclude_premium: bool,
    pub endorsements: Vec<Endorsement>,
    pub operating_system: String,
    pub operating_system_release: String,
    pub pe_requirement: String,
    pub puppet_requirement: String,
    pub with_minimum_score: u32,
    pub module_groups: Vec<ModuleGroup>,
    pub show_deleted: bool,
    pub hide_deprecated: bool,
    pub only_latest: bool,
    pub slugs: Vec<String>,
    pub with_html: bool,
    pub include_fields: Vec<String>,
    pub exclude_fields: Vec<String>,
    pub starts_with: String,
    pub with_release_since: String,
}

impl QueryOptions for ListModulesOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::default();
        q.number("limit", self.limit);
        q.number("offset", self.offset);
        q.value("sort_by", self.sort_by);
        q.text("tag", &self.tag);
        q.text("owner", &self.owner);
        q.flag("with_tasks", self.with_tasks);
        q.flag("with_plans", self.with_plans);
        q.flag("with_pdk", self.with_pdk);
        q.flag("premium", self.premium);
        q.flag("exclude_premium", self.exclude_premium);
        q.list("endorsements", &self.endorsements);
        q.text("operating_system", &self.operating_system);
        q.text("operating_system_release", &self.operating_system_release);
        q.text("pe_requirement", &self.pe_requirement);
        q.text("puppet_requirement", &self.puppet_requirement);
        q.number("with_minimum_score", self.with_minimum_score);
        q.list("module_groups", &self.module_groups);
        q.flag("show_deleted", self.show_deleted);
        q.flag("hide_deprecated", self.hide_deprecated);
        q.flag("only_latest", self.only_latest);
        q.list("slugs", &self.slugs);
        q.flag("with_html", self.with_html);
        q.list("include_fields", &self.include_fields);
        q.list("exclude_fields", &self.exclude_fields);
        q.text("starts_with", &self.starts_with);
        q.text("with_release_since", &self.with_release_since);
        q.finish()
    }
}

/// Response shaping for `GET modules/{slug}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetModuleOptions {
    pub with_html: bool,
    pub include_fields: Vec<String>,
    pub exclude_fields: Vec<String>,
}

impl QueryOptions for GetModuleOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::default();
        q.flag("with_html", self.with_html);
        q.list("include_fields", &self.include_fields);
        q.list("exclude_fields", &self.exclude_fields);
        q.finish()
    }
}

/// Query parameters for `DELETE modules/{slug}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteModuleParams {
    /// Reason recorded against the soft delete.
    pub reason: String,
}

impl QueryOptions for DeleteModuleParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::default();
        q.text("reason", &self.reason);
        q.finish()
    }
}

/// Action sent in the body of a deprecation `PATCH`.
pub const DEPRECATE_ACTION: &str = "delete";

/// Parameters for marking a module as deprecated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecateModuleParams {
    /// Reason for the deprecation.
    pub reason: String,
    /// Slug of the module that replaces this one. Accepts legacy
    /// (case-sensitive) module naming.
    pub replacement_slug: String,
}

/// Body of `PATCH modules/{slug}`: `{"action": ..., "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecateModuleBody {
    pub action: String,
    pub params: DeprecateModuleParams,
}

impl From<DeprecateModuleParams> for DeprecateModuleBody {
    fn from(params: DeprecateModuleParams) -> Self {
        Self {
            action: DEPRECATE_ACTION.to_owned(),
            params,
        }
    }
}

// ---------------------------------------------------------------------------
// Releases
// ---------------------------------------------------------------------------

/// Filters and paging for `GET releases`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReleasesOptions {
    pub limit: u32,
    pub offset: u32,
    /// Sort key as understood by the registry (e.g. `"release_date"`).
    pub sort_by: String,
    /// Restrict results to releases of this module slug.
    pub module: String,
    pub owner: String,
    pub with_pdk: bool,
    pub operating_system: String,
    pub operating_system_release: String,
    pub pe_requirement: String,
    pub puppet_requirement: String,
    pub module_groups: Vec<ModuleGroup>,
    pub show_deleted: bool,
    pub hide_deprecated: bool,
    pub with_html: bool,
    pub include_fields: Vec<String>,
    pub exclude_fields: Vec<String>,
}

impl QueryOptions for ListReleasesOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::default();
        q.number("limit", self.limit);
        q.number("offset", self.offset);
        q.text("sort_by", &self.sort_by);
        q.text("module", &self.module);
        q.text("owner", &self.owner);
        q.flag("with_pdk", self.with_pdk);
        q.text("operating_system", &self.operating_system);
        q.text("operating_system_release", &self.operating_system_release);
        q.text("pe_requirement", &self.pe_requirement);
        q.text("puppet_requirement", &self.puppet_requirement);
        q.list("module_groups", &self.module_groups);
        q.flag("show_deleted", self.show_deleted);
        q.flag("hide_deprecated", self.hide_deprecated);
        q.flag("with_html", self.with_html);
        q.list("include_fields", &self.include_fields);
        q.list("exclude_fields", &self.exclude_fields);
        q.finish()
    }
}
