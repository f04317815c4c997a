//! `docs.toml` discovery

use anyhow::{Context, Result};
use cmc_docs::DocsConfig;
use std::path::Path;

pub const CONFIG_FILE: &str = "docs.toml";

/// Load page configuration.
///
/// An explicit path must exist. Without one, `docs.toml` in the current
/// directory is used if present, otherwise the defaults.
pub fn load(explicit: Option<&Path>) -> Result<DocsConfig> {
    let path = match explicit {
        Some(path) if path.is_dir() => path.join(CONFIG_FILE),
        Some(path) => path.to_path_buf(),
        None => {
            let local = Path::new(CONFIG_FILE);
            if !local.exists() {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                return Ok(DocsConfig::default());
            }
            local.to_path_buf()
        }
    };

    if !path.exists() {
        anyhow::bail!("No config found at {}", path.display());
    }

    let config = DocsConfig::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded docs config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/cmc/docs.toml"))).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }

    #[test]
    fn test_directory_path_reads_docs_toml() {
        let dir = std::env::temp_dir().join(format!("cmc-cli-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), "[search]\nmin_query_len = 3\n").unwrap();

        let config = load(Some(&dir)).unwrap();
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.search.input_id, "docs-search");

        fs::remove_dir_all(&dir).unwrap();
    }
}
