use crate::config::{
    DEFAULT_API_KEY_ENV, DEFAULT_CATS_ENDPOINT, DEFAULT_DOGS_ENDPOINT,
    DEFAULT_MIN_LIFE_EXPECTANCY, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_MS,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PetMatchError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
    pub fetch: Option<FetchSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub cats_endpoint: Option<String>,
    pub dogs_endpoint: Option<String>,
    pub api_key: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchSection {
    pub min_life_expectancy: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub cache: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PetMatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PetMatchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${X_API_KEY})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PetMatchError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn fetch(&self) -> FetchSection {
        self.fetch.clone().unwrap_or_default()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.cats_endpoint", self.cats_endpoint())?;
        validate_url("api.dogs_endpoint", self.dogs_endpoint())?;

        if let Some(timeout) = self.fetch().timeout_seconds {
            validate_positive_number("fetch.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn cats_endpoint(&self) -> &str {
        self.api.cats_endpoint.as_deref().unwrap_or(DEFAULT_CATS_ENDPOINT)
    }

    fn dogs_endpoint(&self) -> &str {
        self.api.dogs_endpoint.as_deref().unwrap_or(DEFAULT_DOGS_ENDPOINT)
    }

    fn api_key_source(&self) -> &str {
        if self.api.api_key.is_some() {
            "api.api_key"
        } else {
            DEFAULT_API_KEY_ENV
        }
    }

    /// 未設定時退回 X_API_KEY 環境變數；未解析的 ${...} 視為缺少
    fn api_key(&self) -> Option<String> {
        match &self.api.api_key {
            Some(key) if key.starts_with("${") && key.ends_with('}') => None,
            Some(key) => Some(key.clone()),
            None => std::env::var(DEFAULT_API_KEY_ENV).ok(),
        }
    }

    fn user_agent(&self) -> &str {
        self.api.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn min_life_expectancy(&self) -> u32 {
        self.fetch()
            .min_life_expectancy
            .unwrap_or(DEFAULT_MIN_LIFE_EXPECTANCY)
    }

    fn timeout_seconds(&self) -> u64 {
        self.fetch().timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn retry_attempts(&self) -> u32 {
        self.fetch().retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS)
    }

    fn retry_delay_ms(&self) -> u64 {
        self.fetch().retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS)
    }

    fn cache_enabled(&self) -> bool {
        self.fetch().cache.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
