use crate::config::toml_config::TomlConfig;
use crate::config::{
    ApiSettings, DEFAULT_API_KEY_ENV, DEFAULT_CATS_ENDPOINT, DEFAULT_DOGS_ENDPOINT,
    DEFAULT_USER_AGENT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-match")]
#[command(about = "Browse cat and dog breeds or find one that fits your preferences")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CATS_ENDPOINT)]
    pub cats_endpoint: String,

    #[arg(long, default_value = DEFAULT_DOGS_ENDPOINT)]
    pub dogs_endpoint: String,

    #[arg(long, default_value = DEFAULT_API_KEY_ENV, help = "Environment variable holding the API key")]
    pub api_key_env: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = "1")]
    pub min_life_expectancy: u32,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "0")]
    pub retry_attempts: u32,

    #[arg(long, default_value = "500")]
    pub retry_delay_ms: u64,

    #[arg(long, help = "Fetch breed details again on every page")]
    pub no_cache: bool,

    #[arg(long, help = "Do not clear the screen between menus")]
    pub no_clear: bool,

    /// Path to a TOML configuration file; replaces the API flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 有指定設定檔時以設定檔為準，`--no-cache` 仍然生效
    pub fn resolve_settings(&self) -> Result<ApiSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                ApiSettings::from_provider(&config)?
            }
            None => ApiSettings::from_provider(self)?,
        };

        if self.no_cache {
            settings.cache_enabled = false;
        }

        Ok(settings)
    }
}

impl ConfigProvider for CliConfig {
    fn cats_endpoint(&self) -> &str {
        &self.cats_endpoint
    }

    fn dogs_endpoint(&self) -> &str {
        &self.dogs_endpoint
    }

    fn api_key_source(&self) -> &str {
        &self.api_key_env
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok()
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn min_life_expectancy(&self) -> u32 {
        self.min_life_expectancy
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    fn retry_delay_ms(&self) -> u64 {
        self.retry_delay_ms
    }

    fn cache_enabled(&self) -> bool {
        !self.no_cache
    }
}
