//! `[search]` section: which search backend the site uses.
//!
//! The `provider` key selects the variant, and only that variant's keys are
//! accepted next to it.
//!
//! ```toml
//! [search]
//! provider = "kbar"
//! search_documents_path = "/search.json"
//! ```
//!
//! ```toml
//! [search]
//! provider = "algolia"
//! app_id = "R2IYF7ETH7"
//! api_key = "599cec31baffa4868cae4e79f180729b"
//! index_name = "docsearch"
//! ```

use super::assets::validate_suffix;
use crate::config::{BasePath, ConfigDiagnostics, FieldPath};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ============================================================================
// file form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchSection {
    Kbar(KbarSection),
    Algolia(AlgoliaSection),
}

impl Default for SearchSection {
    fn default() -> Self {
        Self::Kbar(KbarSection::default())
    }
}

/// In-browser command palette fed by a prebuilt JSON index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KbarSection {
    /// Path of the search index, appended to the base path.
    pub search_documents_path: String,
}

impl Default for KbarSection {
    fn default() -> Self {
        Self {
            search_documents_path: "/search.json".into(),
        }
    }
}

/// Hosted Algolia DocSearch. All three keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgoliaSection {
    /// Application ID provided by Algolia.
    pub app_id: String,
    /// Public search-only API key.
    pub api_key: String,
    pub index_name: String,
}

impl SearchSection {
    pub const SEARCH_DOCUMENTS_PATH: FieldPath = FieldPath::new("search.search_documents_path");
    pub const APP_ID: FieldPath = FieldPath::new("search.app_id");
    pub const API_KEY: FieldPath = FieldPath::new("search.api_key");
    pub const INDEX_NAME: FieldPath = FieldPath::new("search.index_name");

    pub const fn provider(&self) -> SearchProvider {
        match self {
            Self::Kbar(_) => SearchProvider::Kbar,
            Self::Algolia(_) => SearchProvider::Algolia,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Kbar(kbar) => {
                validate_suffix(
                    Self::SEARCH_DOCUMENTS_PATH,
                    &kbar.search_documents_path,
                    diag,
                );
            }
            Self::Algolia(algolia) => {
                for (field, value) in [
                    (Self::APP_ID, &algolia.app_id),
                    (Self::API_KEY, &algolia.api_key),
                    (Self::INDEX_NAME, &algolia.index_name),
                ] {
                    if value.trim().is_empty() {
                        diag.error(field, format!("`{}` must not be empty", field.as_str()));
                    }
                }
            }
        }
    }

    /// Apply the base path to the kbar index location.
    pub fn resolve(&self, base: &BasePath) -> SearchConfig {
        match self {
            Self::Kbar(kbar) => SearchConfig::Kbar(KbarConfig {
                search_documents_path: base.join(&kbar.search_documents_path),
            }),
            Self::Algolia(algolia) => SearchConfig::Algolia(AlgoliaConfig {
                app_id: algolia.app_id.clone(),
                api_key: algolia.api_key.clone(),
                index_name: algolia.index_name.clone(),
            }),
        }
    }
}

// ============================================================================
// resolved form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProvider {
    Kbar,
    Algolia,
}

impl SearchProvider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kbar => "kbar",
            Self::Algolia => "algolia",
        }
    }
}

impl fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KbarConfig {
    pub search_documents_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgoliaConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
}

/// Resolved search settings. Only the selected provider's settings exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchConfig {
    Kbar(KbarConfig),
    Algolia(AlgoliaConfig),
}

impl SearchConfig {
    pub const fn provider(&self) -> SearchProvider {
        match self {
            Self::Kbar(_) => SearchProvider::Kbar,
            Self::Algolia(_) => SearchProvider::Algolia,
        }
    }
}

/// Serializes as `{ provider, kbarConfig }` or `{ provider, algoliaConfig }`,
/// the shape the site generator reads.
impl Serialize for SearchConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SearchConfig", 2)?;
        state.serialize_field("provider", self.provider().as_str())?;
        match self {
            Self::Kbar(kbar) => state.serialize_field("kbarConfig", kbar)?,
            Self::Algolia(algolia) => state.serialize_field("algoliaConfig", algolia)?,
        }
        state.end()
    }
}
