//! Config field paths used to key diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a field in `blogmeta.toml` (e.g. `search.app_id`).
///
/// Each section exposes its paths as associated constants, so a diagnostic
/// never carries a misspelled field name:
///
/// ```ignore
/// diag.error(LinksSection::SITE_URL, "invalid URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
