//! `blogmeta.toml` generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::MetadataSource;

/// Generate `blogmeta.toml` content holding the shipped metadata.
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# blogmeta configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("#\n");
    out.push_str("# [assets] paths and search_documents_path are prefixed with $BASE_PATH.\n");
    out.push_str("# [appearance] theme: \"system\", \"dark\" or \"light\".\n");
    out.push_str("# [search] provider: \"kbar\" (search_documents_path)\n");
    out.push_str("#   or \"algolia\" (app_id, api_key, index_name).\n");
    out.push_str("# [extra] keys are passed through unchanged.\n\n");

    let body = toml::to_string_pretty(&MetadataSource::default())
        .context("Failed to serialize default metadata")?;
    out.push_str(&body);

    Ok(out)
}

/// Write the template to `path`.
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template()?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_source;
    use tempfile::TempDir;

    #[test]
    fn test_template_holds_shipped_metadata() {
        let template = generate_config_template().unwrap();
        assert_eq!(test_parse_source(&template), MetadataSource::default());
    }

    #[test]
    fn test_template_sections() {
        let template = generate_config_template().unwrap();
        for section in ["[site]", "[links]", "[appearance]", "[assets]", "[search]"] {
            assert!(template.contains(section), "missing {section}");
        }
        assert!(template.contains("provider = \"kbar\""));
        assert!(!template.lines().any(|line| line.trim() == "[extra]"));
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blogmeta.toml");
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# blogmeta configuration file"));
    }
}
