#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Species;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PetMatchError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url,
};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_CATS_ENDPOINT: &str = "https://api.api-ninjas.com/v1/cats";
pub const DEFAULT_DOGS_ENDPOINT: &str = "https://api.api-ninjas.com/v1/dogs";
pub const DEFAULT_API_KEY_ENV: &str = "X_API_KEY";
pub const DEFAULT_USER_AGENT: &str = "Chrome/91.0.4472.124";
pub const DEFAULT_MIN_LIFE_EXPECTANCY: u32 = 1;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 0;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// 上限，避免設定錯誤造成長時間卡住
const MAX_RETRY_ATTEMPTS: u32 = 5;

/// 已驗證的 API 設定，建構 HTTP client 時傳入
#[derive(Clone)]
pub struct ApiSettings {
    pub cats_endpoint: String,
    pub dogs_endpoint: String,
    pub api_key: String,
    pub user_agent: String,
    pub min_life_expectancy: u32,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    pub cache_enabled: bool,
}

impl ApiSettings {
    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        validate_url("cats_endpoint", config.cats_endpoint())?;
        validate_url("dogs_endpoint", config.dogs_endpoint())?;
        validate_non_empty_string("user_agent", config.user_agent())?;
        validate_positive_number("timeout_seconds", config.timeout_seconds(), 1)?;

        if config.retry_attempts() > MAX_RETRY_ATTEMPTS {
            return Err(PetMatchError::InvalidConfigValueError {
                field: "retry_attempts".to_string(),
                value: config.retry_attempts().to_string(),
                reason: format!("Value must be at most {}", MAX_RETRY_ATTEMPTS),
            });
        }

        let api_key = config.api_key().filter(|key| !key.trim().is_empty());
        let api_key = validate_required_field(config.api_key_source(), &api_key)?.clone();

        Ok(Self {
            cats_endpoint: config.cats_endpoint().to_string(),
            dogs_endpoint: config.dogs_endpoint().to_string(),
            api_key,
            user_agent: config.user_agent().to_string(),
            min_life_expectancy: config.min_life_expectancy(),
            timeout: Duration::from_secs(config.timeout_seconds()),
            retry_attempts: config.retry_attempts(),
            retry_delay: Duration::from_millis(config.retry_delay_ms()),
            cache_enabled: config.cache_enabled(),
        })
    }

    pub fn endpoint(&self, species: Species) -> &str {
        match species {
            Species::Cat => &self.cats_endpoint,
            Species::Dog => &self.dogs_endpoint,
        }
    }
}

// API key 不寫入日誌
impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("cats_endpoint", &self.cats_endpoint)
            .field("dogs_endpoint", &self.dogs_endpoint)
            .field("api_key", &"***")
            .field("user_agent", &self.user_agent)
            .field("min_life_expectancy", &self.min_life_expectancy)
            .field("timeout", &self.timeout)
            .field("retry_attempts", &self.retry_attempts)
            .field("retry_delay", &self.retry_delay)
            .field("cache_enabled", &self.cache_enabled)
            .finish()
    }
}
