use crate::error::{BlogrError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEED_SOURCE: &str = "index.html";
const DEFAULT_OUTPUT_FILE: &str = "blog.html";
const DEFAULT_SITE_TITLE: &str = "My Blog";

/// Configuration for blogr, stored in the data directory's config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogrConfig {
    /// Markup file scanned for post cards on first run
    #[serde(default = "default_seed_source")]
    pub seed_source: String,

    /// Where `publish` writes the rendered listing page
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Title of the rendered pages
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

fn default_seed_source() -> String {
    DEFAULT_SEED_SOURCE.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

impl Default for BlogrConfig {
    fn default() -> Self {
        Self {
            seed_source: default_seed_source(),
            output_file: default_output_file(),
            site_title: default_site_title(),
        }
    }
}

impl BlogrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BlogrError::Io)?;
        let config: BlogrConfig =
            serde_json::from_str(&content).map_err(BlogrError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BlogrError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BlogrError::Serialization)?;
        fs::write(config_path, content).map_err(BlogrError::Io)?;
        Ok(())
    }

    /// Set a value by its config key. Unknown keys are an Api error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-source" => self.seed_source = value.to_string(),
            "output-file" => self.output_file = value.to_string(),
            "site-title" => self.site_title = value.to_string(),
            other => {
                return Err(BlogrError::Api(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "seed-source" => Some(&self.seed_source),
            "output-file" => Some(&self.output_file),
            "site-title" => Some(&self.site_title),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BlogrConfig::default();
        assert_eq!(config.seed_source, "index.html");
        assert_eq!(config.output_file, "blog.html");
        assert_eq!(config.site_title, "My Blog");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BlogrConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, BlogrConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = BlogrConfig::default();
        config.set("site-title", "Field Notes").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BlogrConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.site_title, "Field Notes");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = BlogrConfig::default();
        assert!(config.set("no-such-key", "x").is_err());
        assert!(config.get("no-such-key").is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: BlogrConfig =
            serde_json::from_str(r#"{"site_title":"Only title"}"#).unwrap();
        assert_eq!(config.site_title, "Only title");
        assert_eq!(config.seed_source, "index.html");
    }
}
