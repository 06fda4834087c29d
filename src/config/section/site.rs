//! `[site]` section: who writes the blog and in which language.

use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Site identity as shown in headers, feeds and `<html lang>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub author: String,
    /// Text shown in the page header.
    pub header_title: String,
    pub description: String,
    /// Lowercase language tag, e.g. `en-us`.
    pub language: String,
    /// Locale used for date formatting, e.g. `en-US`.
    pub locale: String,
    /// Contact address.
    pub email: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "ryakosh's Blog".into(),
            author: "Arya Shokri".into(),
            header_title: "ryakosh's Blog".into(),
            description: "By creating this blog I intend to remind myself of what I learnt \
                          and did, maybe I’ll be able to help you too!."
                .into(),
            language: "en-us".into(),
            locale: "en-US".into(),
            email: "aryashokri@duck.com".into(),
        }
    }
}

impl SiteSection {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const HEADER_TITLE: FieldPath = FieldPath::new("site.header_title");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.language");
    pub const LOCALE: FieldPath = FieldPath::new("site.locale");
    pub const EMAIL: FieldPath = FieldPath::new("site.email");

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` is not blank
    /// - `language` and `locale` are BCP-47-like tags
    /// - `email` has a local part and a dotted domain
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, format!("`{}` must not be empty", Self::TITLE.as_str()));
        }
        if self.header_title.trim().is_empty() {
            diag.warn(
                Self::HEADER_TITLE,
                "header title is empty, the page header will be blank",
            );
        }

        for (field, tag, example) in [
            (Self::LANGUAGE, &self.language, "en-us"),
            (Self::LOCALE, &self.locale, "en-US"),
        ] {
            if !is_language_tag(tag) {
                diag.error_with_hint(
                    field,
                    format!("'{tag}' is not a language tag"),
                    format!("use a tag like \"{example}\""),
                );
            }
        }

        if !is_email(&self.email) {
            diag.error_with_hint(
                Self::EMAIL,
                format!("'{}' is not an email address", self.email),
                "use format like name@example.com",
            );
        }
    }
}

/// Loose BCP-47 shape: a 2-3 letter primary subtag followed by
/// alphanumeric subtags, separated by `-`.
fn is_language_tag(tag: &str) -> bool {
    static RE_TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap());
    RE_TAG.is_match(tag)
}

fn is_email(email: &str) -> bool {
    static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
    });
    RE_EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_source;

    #[test]
    fn test_site_defaults() {
        let site = SiteSection::default();
        assert_eq!(site.title, "ryakosh's Blog");
        assert_eq!(site.header_title, site.title);
        assert_eq!(site.author, "Arya Shokri");
        assert_eq!(site.language, "en-us");
        assert_eq!(site.locale, "en-US");
        assert!(site.description.starts_with("By creating this blog"));
    }

    #[test]
    fn test_site_partial_override() {
        let source = test_parse_source("[site]\ntitle = \"Notes\"\nlocale = \"de-DE\"");
        assert_eq!(source.site.title, "Notes");
        assert_eq!(source.site.locale, "de-DE");
        // untouched fields keep shipped values
        assert_eq!(source.site.author, "Arya Shokri");
        assert_eq!(source.site.language, "en-us");
    }

    #[test]
    fn test_language_tags() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("en-us"));
        assert!(is_language_tag("zh-Hans-CN"));
        assert!(!is_language_tag("english"));
        assert!(!is_language_tag("en_US"));
        assert!(!is_language_tag(""));
    }

    #[test]
    fn test_email() {
        assert!(is_email("aryashokri@duck.com"));
        assert!(!is_email("aryashokri"));
        assert!(!is_email("@duck.com"));
        assert!(!is_email("a@duck"));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let site = SiteSection {
            title: "  ".into(),
            language: "english".into(),
            email: "nobody".into(),
            ..SiteSection::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![SiteSection::TITLE, SiteSection::LANGUAGE, SiteSection::EMAIL]
        );
    }

    #[test]
    fn test_messages_carry_no_color_codes() {
        let site = SiteSection {
            title: String::new(),
            ..SiteSection::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);

        assert_eq!(diag.errors()[0].message, "`site.title` must not be empty");
        assert!(diag.errors().iter().all(|e| !e.message.contains('\x1b')));
    }
}
