use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Fetch failed: {message}")]
    FetchError { message: String },

    #[error("Unexpected response shape: {message}")]
    UnexpectedResponse { message: String },

    #[error("All {attempts} fetch attempts failed: {last_error}")]
    RetryExhausted {
        attempts: u32,
        last_error: Box<DirectoryError>,
    },
}

// Substrings that mark a failure as transient when only a message is available.
const TRANSIENT_MARKERS: [&str; 5] = ["503", "fetch failed", "network", "ECONNRESET", "TLS"];

impl DirectoryError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::FetchError {
            message: message.into(),
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status() == Some(reqwest::StatusCode::SERVICE_UNAVAILABLE)
            }
            Self::FetchError { message } => TRANSIENT_MARKERS.iter().any(|m| message.contains(m)),
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Could not reach the startup directory service".to_string(),
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(_) => "Listing data is not valid JSON".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Configuration problem with '{}'", field)
            }
            Self::FetchError { message } => format!("Fetching listings failed: {}", message),
            Self::UnexpectedResponse { .. } => {
                "The listing service returned data in an unexpected shape".to_string()
            }
            Self::RetryExhausted { attempts, .. } => {
                format!("Listings could not be fetched after {} attempts", attempts)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::FetchError { .. } | Self::RetryExhausted { .. } => {
                "Check the endpoint and your network connection, then try again"
            }
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::SerializationError(_) | Self::UnexpectedResponse { .. } => {
                "Listings must be a JSON array of startup records"
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
