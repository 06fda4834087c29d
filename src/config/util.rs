//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied config path.
pub fn expand_config_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute names are only checked for existence.
///
/// # Example
/// ```text
/// /home/user/blog/data/authors/  ← start
/// /home/user/blog/blogmeta.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data/authors");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("blogmeta.toml"), "").unwrap();

        let found = find_config_file(Path::new("blogmeta.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("blogmeta.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let name = Path::new("blogmeta-test-does-not-exist.toml");
        assert_eq!(find_config_file(name, dir.path()), None);
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.toml");
        assert_eq!(find_config_file(&path, Path::new("/")), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_config_path(Path::new("~/x.toml"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("x.toml"));
    }

    #[test]
    fn test_expand_plain_path_unchanged() {
        assert_eq!(
            expand_config_path(Path::new("conf/blogmeta.toml")),
            PathBuf::from("conf/blogmeta.toml")
        );
    }
}
