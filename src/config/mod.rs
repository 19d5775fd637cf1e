#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::params::DEFAULT_PAGE_SIZE;
use crate::domain::ports::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Plain settings for building a client from code.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_key: String,
    pub api_base: String,
    pub timeout_seconds: u64,
    pub page_size: u32,
}

impl ClientSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl ConfigProvider for ClientSettings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn default_page_size(&self) -> u32 {
        self.page_size
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_common(self)
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_common<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_non_empty_string("api.key", config.api_key())?;
    validate_url("api.base_url", config.api_base())?;
    validate_range("api.timeout_seconds", config.timeout_seconds(), 1, 300)?;
    validate_range("pagination.page_size", config.default_page_size(), 1, 100)?;
    Ok(())
}
