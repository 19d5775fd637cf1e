use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("API error ({status}): {message}")]
    ApiError {
        status: u16,
        error_type: Option<String>,
        message: String,
        code: Option<String>,
        param: Option<String>,
    },

    #[error("Card number contains non-numeric character '{character}' at position {position}")]
    NonNumericCardNumber { position: usize, character: char },

    #[error("Invalid {network} card: {reason}")]
    InvalidCard { network: String, reason: String },

    #[error("Configuration validation error in field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Card,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StripeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StripeError::HttpError(_) => ErrorCategory::Network,
            StripeError::ApiError { .. } => ErrorCategory::Api,
            StripeError::NonNumericCardNumber { .. } | StripeError::InvalidCard { .. } => {
                ErrorCategory::Card
            }
            StripeError::ConfigValidationError { .. }
            | StripeError::InvalidConfigValueError { .. }
            | StripeError::MissingConfigError { .. }
            | StripeError::UrlError(_) => ErrorCategory::Configuration,
            StripeError::IoError(_) | StripeError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StripeError::NonNumericCardNumber { .. } | StripeError::InvalidCard { .. } => {
                ErrorSeverity::Low
            }
            StripeError::HttpError(_) => ErrorSeverity::Medium,
            StripeError::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            StripeError::ApiError { .. } | StripeError::SerializationError(_) => {
                ErrorSeverity::High
            }
            StripeError::ConfigValidationError { .. }
            | StripeError::InvalidConfigValueError { .. }
            | StripeError::MissingConfigError { .. }
            | StripeError::UrlError(_)
            | StripeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StripeError::HttpError(_) => "Could not reach the payment API".to_string(),
            StripeError::ApiError {
                status, message, ..
            } => format!("The payment API rejected the request ({}): {}", status, message),
            StripeError::NonNumericCardNumber { .. } => {
                "The card number may only contain digits".to_string()
            }
            StripeError::InvalidCard { .. } => "The card number failed its checksum".to_string(),
            StripeError::ConfigValidationError { field, .. }
            | StripeError::InvalidConfigValueError { field, .. }
            | StripeError::MissingConfigError { field } => {
                format!("Configuration problem with '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the configured API base URL",
            ErrorCategory::Api => "Check the API key and request parameters",
            ErrorCategory::Card => "Re-enter the card number without spaces or separators",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML config file",
            ErrorCategory::Data => "Inspect the API response payload for unexpected fields",
        }
    }
}

pub type Result<T> = std::result::Result<T, StripeError>;
