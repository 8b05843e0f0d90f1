use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::error::{BlogError, Result};
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::store::fs::DEFAULT_POSTS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SITE_URL: &str = "http://localhost/";

/// Configuration for blogdeck, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    /// Path of the posts payload
    #[serde(default = "default_source")]
    pub source: String,

    /// Cards per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet period before a typed search is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// URL handed out when sharing a post
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

fn default_source() -> String {
    DEFAULT_POSTS_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            site_url: default_site_url(),
        }
    }
}

/// Keys accepted by `get` / `set`.
pub const CONFIG_KEYS: &[&str] = &["source", "page-size", "debounce-ms", "site-url"];

impl BlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BlogConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "source" => Ok(self.source.clone()),
            "page-size" => Ok(self.page_size.to_string()),
            "debounce-ms" => Ok(self.debounce_ms.to_string()),
            "site-url" => Ok(self.site_url.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source" => self.source = value.to_string(),
            "page-size" => {
                let page_size = parse_number(key, value)?;
                if page_size == 0 {
                    return Err(zero_page_size());
                }
                self.page_size = page_size;
            }
            "debounce-ms" => self.debounce_ms = parse_number(key, value)?,
            "site-url" => self.site_url = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(zero_page_size());
        }
        Ok(())
    }
}

fn zero_page_size() -> BlogError {
    BlogError::Config("page-size must be at least 1".into())
}

fn unknown_key(key: &str) -> BlogError {
    BlogError::Config(format!(
        "Unknown config key: {} (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| BlogError::Config(format!("{} expects a number, got {}", key, value)))
}
