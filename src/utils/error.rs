use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetMatchError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}: {body}")]
    StatusError {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Unexpected response body from {url}: {reason}")]
    InvalidResponseError { url: String, reason: String },

    #[error("Breed not found: {name}")]
    NotFoundError { name: String },

    #[error("Empty breed directory for {species}")]
    EmptyDirectoryError {
        species: String,
        cats: usize,
        dogs: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl PetMatchError {
    /// 失敗是否值得重試（連線錯誤或 5xx）
    pub fn is_retryable(&self) -> bool {
        match self {
            PetMatchError::ApiError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            PetMatchError::StatusError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PetMatchError::MissingConfigError { field } => {
                format!("Required setting '{}' is not set", field)
            }
            PetMatchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PetMatchError::ConfigError { message } => format!("Configuration problem: {}", message),
            PetMatchError::ApiError(_) | PetMatchError::StatusError { .. } => {
                "Could not fetch breed data from the API".to_string()
            }
            PetMatchError::EmptyDirectoryError { .. } | PetMatchError::InvalidResponseError { .. } => {
                "The API returned no usable breed data".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PetMatchError::MissingConfigError { .. } => {
                "Export the API key (default variable X_API_KEY) or add it to a .env file"
            }
            PetMatchError::InvalidConfigValueError { .. } | PetMatchError::ConfigError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
            PetMatchError::StatusError { status: 401 | 403, .. } => "Check that the API key is valid",
            PetMatchError::ApiError(_) | PetMatchError::StatusError { .. } => {
                "Check your internet connection and try again"
            }
            PetMatchError::EmptyDirectoryError { .. } | PetMatchError::InvalidResponseError { .. } => {
                "Check the endpoint URLs and the min_life_expectancy filter"
            }
            _ => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PetMatchError>;
