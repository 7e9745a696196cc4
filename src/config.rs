use crate::classifier::{BrandMatchMode, SiteQueries};
use crate::constants::{
    DEFAULT_FETCH_DELAY_MS, DEFAULT_FETCH_TIMEOUT_SECONDS, DEFAULT_MAX_RESULTS,
    DEFAULT_RESULT_SELECTOR, DEFAULT_SEARCH_DELAY_MS, DEFAULT_SEARCH_ENDPOINT, DEFAULT_USER_AGENT,
};
use crate::dictionary::NameDictionaries;
use crate::error::{ResolverError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    pub sites: SitesConfig,
    pub dictionaries: DictionaryPaths,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Appended after the quoted company name.
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_result_selector")]
    pub result_selector: String,
    #[serde(default = "default_search_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_FETCH_DELAY_MS,
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SitesConfig {
    /// Professional-network marker first, then the reserved prefixes.
    pub markers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryPaths {
    pub first_names: PathBuf,
    pub common_words: PathBuf,
    pub brand_names: PathBuf,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub brand_match: BrandMatchMode,
    #[serde(default = "default_true")]
    pub reject_brand_surnames: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            brand_match: BrandMatchMode::default(),
            reject_brand_surnames: true,
        }
    }
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_result_selector() -> String {
    DEFAULT_RESULT_SELECTOR.to_string()
}

fn default_search_delay_ms() -> u64 {
    DEFAULT_SEARCH_DELAY_MS
}

fn default_fetch_delay_ms() -> u64 {
    DEFAULT_FETCH_DELAY_MS
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config_path = path.as_ref();
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ResolverError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&config_content)?;
        // dictionary paths are relative to the config file
        if let Some(base) = config_path.parent() {
            config.dictionaries.rebase(base);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(ResolverError::Config("search.max_results must be at least 1".into()));
        }
        if self.search.query.trim().is_empty() {
            return Err(ResolverError::Config("search.query must not be blank".into()));
        }
        self.site_queries().map(|_| ())
    }

    pub fn site_queries(&self) -> Result<SiteQueries> {
        SiteQueries::from_markers(&self.sites.markers)
    }

    pub fn load_dictionaries(&self) -> Result<NameDictionaries> {
        NameDictionaries::load(
            &self.dictionaries.first_names,
            &self.dictionaries.common_words,
            &self.dictionaries.brand_names,
        )
    }
}

impl DictionaryPaths {
    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.first_names, &mut self.common_words, &mut self.brand_names] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
