//! Base path lookup.
//!
//! Sites served from a sub-path (e.g. `https://example.com/blog`) prefix every
//! static asset reference with that path. The prefix comes from the
//! `BASE_PATH` environment variable and is empty when unset.

use std::fmt;

/// Environment variable holding the base path.
pub const BASE_PATH_VAR: &str = "BASE_PATH";

/// Optional URL prefix applied to asset and search-index paths.
///
/// Joining is plain concatenation: `"/blog/"` + `"/search.json"` yields
/// `"/blog//search.json"`. Nothing is normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Read `BASE_PATH` from the process environment.
    ///
    /// Unset, empty and non-unicode values all resolve to the empty prefix.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the base path through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self(lookup(BASE_PATH_VAR).unwrap_or_default())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix `suffix` with the base path.
    #[inline]
    pub fn join(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_empty() {
        let base = BasePath::from_lookup(|_| None);
        assert!(base.is_empty());
        assert_eq!(base.join("/static/images/logo.png"), "/static/images/logo.png");
    }

    #[test]
    fn test_lookup_reads_base_path_var() {
        let base = BasePath::from_lookup(|key| (key == BASE_PATH_VAR).then(|| "/blog".to_string()));
        assert_eq!(base.as_str(), "/blog");
        assert_eq!(base.join("/search.json"), "/blog/search.json");
    }

    #[test]
    fn test_join_does_not_normalize_slashes() {
        let base = BasePath::new("/blog/");
        assert_eq!(base.join("/search.json"), "/blog//search.json");

        let base = BasePath::new("blog");
        assert_eq!(base.join("/search.json"), "blog/search.json");
    }
}
