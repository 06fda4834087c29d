//! Config initialization module.
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Template generation

mod config;
mod validate;

use crate::log;
use anyhow::Result;
use std::path::Path;

/// Write a starter `blogmeta.toml`.
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn new_config(path: &Path, dry_run: bool, force: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template()?);
        return Ok(());
    }

    validate::validate_target(path, force)?;
    config::write_config(path)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetadataSource;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_roundtrips_through_loader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blogmeta.toml");

        new_config(&path, false, false).unwrap();
        let source = MetadataSource::from_path(&path).unwrap();
        assert_eq!(source.site, MetadataSource::default().site);
        assert_eq!(source.search, MetadataSource::default().search);

        // second run without --force must not overwrite
        assert!(new_config(&path, false, false).is_err());
    }
}
