//! `blogmeta check`: validate the metadata without emitting it.

use anyhow::Result;

use crate::config::{BasePath, ConfigError, MetadataSource};
use crate::log;

/// Validate `source` under `base`, logging a summary on success.
pub fn check_metadata(source: &MetadataSource, base: &BasePath) -> Result<()> {
    source.validate(base).map_err(ConfigError::Diagnostics)?;

    let origin = match &source.config_path {
        Some(path) => path.display().to_string(),
        None => "shipped metadata".to_string(),
    };
    let meta = source.resolve(base);
    log!("check"; "{} ok", origin);
    log!("check"; "theme: {}, search: {}, logo: {}", meta.theme, meta.provider(), meta.site_logo);
    if let Some(banner) = meta.absolute_url(&meta.social_banner) {
        log!("check"; "social card: {}", banner);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_source;

    #[test]
    fn test_check_shipped() {
        assert!(check_metadata(&MetadataSource::default(), &BasePath::default()).is_ok());
    }

    #[test]
    fn test_check_reports_diagnostics() {
        let source = test_parse_source("[links]\nsite_url = \"ryakosh.ir\"");
        let err = check_metadata(&source, &BasePath::default()).unwrap_err();

        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "links.site_url");
    }
}
