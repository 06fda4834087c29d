//! `[links]` section: absolute URLs of the site and its author.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksSection {
    /// Public URL of the deployed site.
    pub site_url: String,
    /// Source repository of the site.
    pub site_repo: String,
    /// Author's GitHub profile.
    pub github: String,
}

impl Default for LinksSection {
    fn default() -> Self {
        Self {
            site_url: "https://ryakosh.ir".into(),
            site_repo: "https://github.com/ryakosh/blog".into(),
            github: "https://github.com/ryakosh".into(),
        }
    }
}

impl LinksSection {
    pub const SITE_URL: FieldPath = FieldPath::new("links.site_url");
    pub const SITE_REPO: FieldPath = FieldPath::new("links.site_repo");
    pub const GITHUB: FieldPath = FieldPath::new("links.github");

    /// Validate that every link is an absolute http(s) URL with a host.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_url(Self::SITE_URL, &self.site_url, diag);
        validate_url(Self::SITE_REPO, &self.site_repo, diag);
        validate_url(Self::GITHUB, &self.github, diag);
    }
}

fn validate_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}
