use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::discovery::domain::keyword_extractor::KeywordExtractor;
use crate::discovery::domain::link_generator::LinkGenerator;
use crate::discovery::domain::trusted_sources::TrustedSources;
use crate::shared::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TRUSTED_SOURCES, MAX_KEYWORDS, MAX_LINKS,
    MIN_KEYWORD_LEN,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("at least one trusted source is required")]
    NoSources,
    #[error("trusted source must be an http(s) URL, got '{0}'")]
    InvalidSource(String),
    #[error("{name} must be {allowed}, got {value}")]
    InvalidLimit {
        name: &'static str,
        allowed: String,
        value: usize,
    },
}

/// Tunables for keyword extraction and link discovery.
///
/// Every field is optional in the JSON file; missing ones fall back to the
/// built-in defaults. Limits may only be tightened: at most five keywords
/// per line and five links, and keywords longer than three characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub trusted_sources: Vec<String>,
    pub max_keywords: usize,
    pub max_links: usize,
    pub min_keyword_len: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            trusted_sources: DEFAULT_TRUSTED_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_keywords: MAX_KEYWORDS,
            max_links: MAX_LINKS,
            min_keyword_len: MIN_KEYWORD_LEN,
        }
    }
}

impl DiscoveryConfig {
    /// `<platform config dir>/speechlink/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self = serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.normalize_sources();
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, else from the default location when a file
    /// exists there, else fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(p) = path {
            return Self::load(p);
        }
        match Self::default_path() {
            Some(p) if p.exists() => {
                log::debug!("Loading config from {}", p.display());
                Self::load(&p)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Result<Self, ConfigError> {
        self.trusted_sources = sources;
        self.normalize_sources();
        self.validate()?;
        Ok(self)
    }

    /// Trim whitespace and trailing slashes so joined links never contain
    /// `//search`.
    fn normalize_sources(&mut self) {
        for source in &mut self.trusted_sources {
            *source = source.trim().trim_end_matches('/').to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trusted_sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        if let Some(bad) = self
            .trusted_sources
            .iter()
            .find(|s| !(s.starts_with("http://") || s.starts_with("https://")))
        {
            return Err(ConfigError::InvalidSource(bad.clone()));
        }
        check_at_most("max_keywords", self.max_keywords, MAX_KEYWORDS)?;
        check_at_most("max_links", self.max_links, MAX_LINKS)?;
        if self.min_keyword_len < MIN_KEYWORD_LEN {
            return Err(ConfigError::InvalidLimit {
                name: "min_keyword_len",
                allowed: format!("at least {MIN_KEYWORD_LEN}"),
                value: self.min_keyword_len,
            });
        }
        Ok(())
    }

    pub fn keyword_extractor(&self) -> KeywordExtractor {
        KeywordExtractor::new(self.min_keyword_len, self.max_keywords)
    }

    pub fn link_generator(&self) -> LinkGenerator {
        LinkGenerator::new(TrustedSources::new(&self.trusted_sources), self.max_links)
    }
}

fn check_at_most(name: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidLimit {
            name,
            allowed: format!("between 1 and {max}"),
            value,
        })
    }
}
