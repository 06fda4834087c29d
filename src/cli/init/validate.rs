//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to clobber an existing config unless `force` is set.
pub fn validate_target(path: &Path, force: bool) -> Result<()> {
    if path.is_dir() {
        bail!("'{}' is a directory.", path.display());
    }
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `blogmeta init --force` to overwrite it.",
            path.display()
        );
    }
    Ok(())
}
