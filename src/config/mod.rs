//! Site metadata: `blogmeta.toml` and the resolved object handed to the
//! site generator.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! │   ├── appearance # [appearance]
//! │   ├── assets     # [assets]
//! │   ├── links      # [links]
//! │   ├── search     # [search]
//! │   └── site       # [site]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── env.rs         # BasePath (BASE_PATH)
//! └── mod.rs         # MetadataSource, SiteMetadata (this file)
//! ```
//!
//! # Two forms
//!
//! [`MetadataSource`] is what the user writes: every section optional,
//! asset paths stored without the base path. Its `Default` is the shipped
//! metadata. [`MetadataSource::resolve`] applies a [`BasePath`] and yields
//! the immutable [`SiteMetadata`], serialized in camelCase for the site
//! generator.
//!
//! Resolution never fails. Only reading a user file can.

pub mod env;
pub mod section;
pub mod types;
mod util;

pub use env::{BASE_PATH_VAR, BasePath};
pub use section::{
    AlgoliaConfig, AppearanceSection, AssetsSection, KbarConfig, LinksSection, SearchConfig,
    SearchProvider, SearchSection, SiteSection, Theme,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{expand_config_path, find_config_file};

// ============================================================================
// source form
// ============================================================================

/// Root configuration structure representing `blogmeta.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataSource {
    /// File this source was read from; `None` for the shipped metadata.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    pub site: SiteSection,

    pub links: LinksSection,

    pub appearance: AppearanceSection,

    pub assets: AssetsSection,

    pub search: SearchSection,

    /// Free-form keys passed through to the emitted object
    /// (analytics, comments, newsletter, ...).
    #[serde(skip_serializing_if = "toml::Table::is_empty")]
    pub extra: toml::Table,
}

/// Keys of the emitted object that `[extra]` must not shadow.
const RESERVED_KEYS: &[&str] = &[
    "title",
    "author",
    "headerTitle",
    "description",
    "language",
    "theme",
    "siteUrl",
    "siteRepo",
    "siteLogo",
    "socialBanner",
    "email",
    "github",
    "locale",
    "stickyNav",
    "search",
];

impl MetadataSource {
    pub const BASE_PATH: FieldPath = FieldPath::new("BASE_PATH");
    pub const EXTRA: FieldPath = FieldPath::new("extra");

    /// Load `config_name`, searching upward from the current directory.
    ///
    /// A missing file is not an error: the shipped metadata is used instead.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config_name = expand_config_path(config_name);
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match find_config_file(&config_name, &cwd) {
            Some(path) => {
                debug!("config"; "reading {}", path.display());
                Ok(Self::from_path(&path)?)
            }
            None => {
                debug!("config"; "no {} found, using shipped metadata", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Parse metadata from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a file, warning about keys that were not understood.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut source, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        source.config_path = Some(path.to_path_buf());
        Ok(source)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let source = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((source, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, collecting all problems at once.
    ///
    /// The base path only ever produces warnings: it is applied verbatim.
    pub fn validate(&self, base: &BasePath) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.links.validate(&mut diag);
        self.assets.validate(&mut diag);
        self.search.validate(&mut diag);
        self.validate_extra(&mut diag);
        Self::validate_base_path(base, &mut diag);

        diag.print_warnings();
        diag.into_result()
    }

    fn validate_extra(&self, diag: &mut ConfigDiagnostics) {
        for key in self.extra.keys() {
            if RESERVED_KEYS.contains(&key.as_str()) {
                diag.error_with_hint(
                    Self::EXTRA,
                    format!("`extra.{key}` would shadow the `{key}` field"),
                    "set it in its own section or rename the key",
                );
            }
        }
    }

    fn validate_base_path(base: &BasePath, diag: &mut ConfigDiagnostics) {
        if base.is_empty() {
            return;
        }
        if base.as_str().ends_with('/') {
            diag.warn_with_hint(
                Self::BASE_PATH,
                format!("'{base}' ends with `/`, asset paths will contain `//`"),
                format!("use \"{}\"", base.as_str().trim_end_matches('/')),
            );
        }
        if !base.as_str().starts_with('/') {
            diag.warn_with_hint(
                Self::BASE_PATH,
                format!("'{base}' does not start with `/`, asset paths will be relative"),
                format!("use \"/{base}\""),
            );
        }
    }

    /// Apply `base` and produce the metadata the site generator reads.
    ///
    /// `[extra]` keys that would shadow a metadata field are dropped;
    /// `validate` reports them.
    pub fn resolve(&self, base: &BasePath) -> SiteMetadata {
        SiteMetadata {
            title: self.site.title.clone(),
            author: self.site.author.clone(),
            header_title: self.site.header_title.clone(),
            description: self.site.description.clone(),
            language: self.site.language.clone(),
            theme: self.appearance.theme,
            site_url: self.links.site_url.clone(),
            site_repo: self.links.site_repo.clone(),
            site_logo: base.join(&self.assets.logo),
            social_banner: base.join(&self.assets.social_banner),
            email: self.site.email.clone(),
            github: self.links.github.clone(),
            locale: self.site.locale.clone(),
            sticky_nav: self.appearance.sticky_nav,
            search: self.search.resolve(base),
            extra: self
                .extra
                .iter()
                .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), toml_to_json(value)))
                .collect(),
        }
    }
}

/// Convert TOML values to JSON, rendering datetimes as RFC 3339 strings.
fn toml_to_json(value: &toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s.clone()),
        toml::Value::Integer(i) => JsonValue::from(*i),
        toml::Value::Float(f) => JsonValue::from(*f),
        toml::Value::Boolean(b) => JsonValue::Bool(*b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(items) => JsonValue::Array(items.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => JsonValue::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), toml_to_json(value)))
                .collect(),
        ),
    }
}

// ============================================================================
// resolved form
// ============================================================================

/// Resolved site metadata.
///
/// Built once at start-up and passed by reference; nothing mutates it
/// afterwards. Serializes to the camelCase object the site generator expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub author: String,
    pub header_title: String,
    pub description: String,
    pub language: String,
    pub theme: Theme,
    pub site_url: String,
    pub site_repo: String,
    pub site_logo: String,
    pub social_banner: String,
    pub email: String,
    pub github: String,
    pub locale: String,
    pub sticky_nav: bool,
    pub search: SearchConfig,
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

impl SiteMetadata {
    /// Shipped metadata with `BASE_PATH` taken from the environment.
    pub fn load() -> Self {
        Self::with_base_path(&BasePath::from_env())
    }

    /// Shipped metadata under an explicit base path.
    pub fn with_base_path(base: &BasePath) -> Self {
        MetadataSource::default().resolve(base)
    }

    pub const fn provider(&self) -> SearchProvider {
        self.search.provider()
    }

    /// Join a site-relative path onto `site_url`.
    ///
    /// Returns `None` if `site_url` is not an absolute URL.
    pub fn absolute_url(&self, path: &str) -> Option<String> {
        let base = url::Url::parse(&self.site_url).ok()?;
        base.join(path).ok().map(String::from)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a source, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_source(content: &str) -> MetadataSource {
    let (parsed, ignored) = MetadataSource::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
