//! `[assets]` section: static images referenced by the site shell.
//!
//! Values are suffixes; the base path is prepended when the metadata is
//! resolved.
//!
//! ```toml
//! [assets]
//! logo = "/static/images/logo.png"
//! social_banner = "/static/images/twitter-card.png"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    /// Site logo.
    pub logo: String,
    /// Image used for social cards (Open Graph, Twitter).
    pub social_banner: String,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            logo: "/static/images/logo.png".into(),
            social_banner: "/static/images/twitter-card.png".into(),
        }
    }
}

impl AssetsSection {
    pub const LOGO: FieldPath = FieldPath::new("assets.logo");
    pub const SOCIAL_BANNER: FieldPath = FieldPath::new("assets.social_banner");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_suffix(Self::LOGO, &self.logo, diag);
        validate_suffix(Self::SOCIAL_BANNER, &self.social_banner, diag);
    }
}

/// Suffixes are appended to the base path verbatim, so they must be
/// root-relative.
pub(crate) fn validate_suffix(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if !value.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("'{value}' must start with `/`"),
            format!("use \"/{}\"", value.trim_start_matches("./")),
        );
    }
}
