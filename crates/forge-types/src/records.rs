//! Records decoded from registry responses.
//!
//! Every field is optional on the wire. A field the registry omits, or sends
//! as `null`, decodes to its zero value; `Option` fields decode it to `None`.
//! A `null` in one record never fails a whole page.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;
use crate::{Endorsement, ModuleGroup};

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Paging information included with every list response.
///
/// Link fields are relative URLs (e.g. `"/v3/modules?limit=20&offset=20"`);
/// the registry sends `null` for links that do not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u32,
    pub first: Option<String>,
    #[serde(alias = "previous")]
    pub prev: Option<String>,
    pub current: Option<String>,
    pub next: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

impl Pagination {
    /// Returns `true` if there are more pages to fetch.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

/// A page of results from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

// Manual impl so `T` does not need to be `Default`.
impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            results: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Shorthand for `self.pagination.has_next()`.
    pub fn has_next(&self) -> bool {
        self.pagination.has_next()
    }
}

// ---------------------------------------------------------------------------
// Owners and abbreviated references
// ---------------------------------------------------------------------------

/// The user or organisation that owns a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    pub gravatar_id: Option<String>,
}

/// Abbreviated module, as embedded in a [`Release`] or used as the target of
/// [`Module::superseded_by`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleReference {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub deprecated_at: Option<String>,
    pub owner: Option<Owner>,
}

/// Abbreviated release, as listed in [`Module::releases`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseReference {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub supported: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub deleted_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub file_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_size: u64,
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

/// A module entity.
///
/// Timestamps are kept as the strings the registry sends
/// (e.g. `"2019-03-19 13:04:49 -0700"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub downloads: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub deprecated_at: Option<String>,
    pub deprecated_for: Option<String>,
    pub superseded_by: Option<ModuleReference>,
    pub endorsement: Option<Endorsement>,
    pub module_group: Option<ModuleGroup>,
    #[serde(deserialize_with = "null_as_default")]
    pub premium: bool,
    pub owner: Option<Owner>,
    pub current_release: Option<Box<Release>>,
    #[serde(deserialize_with = "null_as_default")]
    pub releases: Vec<ReleaseReference>,
    pub feedback_score: Option<u32>,
    pub homepage_url: Option<String>,
    pub issues_url: Option<String>,
}

impl Module {
    /// Returns `true` if the module has been marked as deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated_at.as_deref().is_some_and(|at| !at.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Releases
// ---------------------------------------------------------------------------

/// A module release entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub module: Option<ModuleReference>,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    /// Contents of the release's `metadata.json`; its shape is author-defined.
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub supported: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub pdk: bool,
    pub validation_score: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub file_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub file_md5: String,
    pub file_sha256: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub downloads: u64,
    pub readme: Option<String>,
    pub changelog: Option<String>,
    pub license: Option<String>,
    pub reference: Option<String>,
    pub pe_compatibility: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub plans: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub deleted_at: Option<String>,
    pub deleted_for: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_next_requires_non_empty_next_link() {
        assert!(!Pagination::default().has_next());

        let empty = Pagination {
            next: Some(String::new()),
            ..Default::default()
        };
        assert!(!empty.has_next());

        let more = Pagination {
            next: Some("/v3/modules?limit=20&offset=20".into()),
            ..Default::default()
        };
        assert!(more.has_next());
    }

    #[test]
    fn pagination_accepts_null_links_and_previous_spelling() {
        let json = r#"{
            "limit": 20,
            "offset": 20,
            "first": "/v3/modules?limit=20&offset=0",
            "previous": "/v3/modules?limit=20&offset=0",
            "current": "/v3/modules?limit=20&offset=20",
            "next": null,
            "total": 35
        }"#;
        let pagination: Pagination = serde_json::from_str(json).unwrap();

        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.total, 35);
        assert_eq!(pagination.prev.as_deref(), Some("/v3/modules?limit=20&offset=0"));
        assert!(!pagination.has_next());
    }

    #[test]
    fn module_decodes_nulls_and_missing_fields_to_defaults() {
        let json = r#"{
            "slug": "puppetlabs-stdlib",
            "name": "stdlib",
            "deprecated_at": null,
            "endorsement": "supported",
            "module_group": "base",
            "owner": {"uri": "/v3/users/puppetlabs", "slug": "puppetlabs", "username": "puppetlabs", "gravatar_id": null},
            "superseded_by": null,
            "current_release": {"slug": "puppetlabs-stdlib-9.4.1", "version": "9.4.1", "metadata": {"name": "puppetlabs-stdlib"}}
        }"#;
        let module: Module = serde_json::from_str(json).unwrap();

        assert_eq!(module.slug, "puppetlabs-stdlib");
        assert_eq!(module.downloads, 0);
        assert_eq!(module.endorsement, Some(Endorsement::Supported));
        assert_eq!(module.module_group, Some(ModuleGroup::Base));
        assert_eq!(module.owner.as_ref().unwrap().username, "puppetlabs");
        assert!(!module.is_deprecated());

        let release = module.current_release.unwrap();
        assert_eq!(release.version, "9.4.1");
        assert_eq!(release.metadata["name"], "puppetlabs-stdlib");
    }

    #[test]
    fn release_list_page_decodes() {
        let json = r#"{
            "pagination": {"limit": 1, "offset": 0, "next": "/v3/releases?limit=1&offset=1", "total": 2},
            "results": [{
                "slug": "puppetlabs-apache-12.0.0",
                "module": {"slug": "puppetlabs-apache", "name": "apache", "deprecated_at": null},
                "version": "12.0.0",
                "tags": ["apache", "web"],
                "pdk": true,
                "pe_compatibility": null
            }]
        }"#;
        let page: Page<Release> = serde_json::from_str(json).unwrap();

        assert!(page.has_next());
        assert_eq!(page.results.len(), 1);
        let release = &page.results[0];
        assert_eq!(release.module.as_ref().unwrap().name, "apache");
        assert_eq!(release.tags, vec!["apache", "web"]);
        assert!(release.pdk);
        assert!(release.pe_compatibility.is_none());
    }

    #[test]
    fn explicit_null_scalars_decode_to_zero_values() {
        let json = r#"{
            "slug": "puppetlabs-ntp",
            "created_at": null,
            "downloads": null,
            "premium": null,
            "releases": null,
            "endorsement": "premium",
            "current_release": {
                "slug": "puppetlabs-ntp-10.1.0",
                "file_md5": null,
                "file_size": null,
                "tags": null,
                "tasks": null,
                "metadata": null
            }
        }"#;
        let module: Module = serde_json::from_str(json).unwrap();

        assert_eq!(module.slug, "puppetlabs-ntp");
        assert_eq!(module.created_at, "");
        assert_eq!(module.downloads, 0);
        assert!(!module.premium);
        assert!(module.releases.is_empty());
        assert_eq!(module.endorsement, Some(Endorsement::Unknown));

        let release = module.current_release.unwrap();
        assert_eq!(release.file_md5, "");
        assert_eq!(release.file_size, 0);
        assert!(release.tags.is_empty());
        assert!(release.tasks.is_empty());
        assert!(release.metadata.is_null());
    }

    #[test]
    fn one_sparse_record_does_not_fail_the_page() {
        let json = r#"{
            "pagination": {"limit": null, "offset": 0, "total": null, "next": null},
            "results": [
                {"slug": "puppetlabs-stdlib", "downloads": 1000},
                {"slug": "someone-legacy", "downloads": null, "owner": {"username": null}}
            ]
        }"#;
        let page: Page<Module> = serde_json::from_str(json).unwrap();

        assert_eq!(page.pagination.limit, 0);
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].downloads, 0);
        assert_eq!(page.results[1].owner.as_ref().unwrap().username, "");

        let empty: Page<Module> = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(empty.results.is_empty());
    }
}
