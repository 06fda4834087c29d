//! `[appearance]` section: color theme and navbar behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial color theme.
///
/// `System` follows the visitor's `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::System, Self::Dark, Self::Light];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSection {
    pub theme: Theme,
    /// Keep the navbar fixed to the top of the viewport.
    pub sticky_nav: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MetadataSource, test_parse_source};

    #[test]
    fn test_appearance_defaults() {
        let appearance = AppearanceSection::default();
        assert_eq!(appearance.theme, Theme::System);
        assert!(!appearance.sticky_nav);
    }

    #[test]
    fn test_theme_values() {
        for theme in Theme::ALL {
            let source = test_parse_source(&format!("[appearance]\ntheme = \"{theme}\""));
            assert_eq!(source.appearance.theme, theme);
        }
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result = MetadataSource::from_str("[appearance]\ntheme = \"sepia\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_sticky_nav() {
        let source = test_parse_source("[appearance]\nsticky_nav = true");
        assert!(source.appearance.sticky_nav);
        assert_eq!(source.appearance.theme, Theme::System);
    }
}
