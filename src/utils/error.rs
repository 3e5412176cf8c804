use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown shipping service code: {code}")]
    UnknownServiceCode { code: String },

    #[error("Invalid shipment input: {message}")]
    InvalidShipment { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RatingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RatingError::ConfigValidationError { .. }
            | RatingError::InvalidConfigValueError { .. }
            | RatingError::MissingConfigError { .. }
            | RatingError::UnknownServiceCode { .. } => ErrorCategory::Configuration,
            RatingError::InvalidShipment { .. } | RatingError::CsvError(_) => {
                ErrorCategory::Input
            }
            RatingError::IoError(_) | RatingError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RatingError::IoError(_) => "Check that the file exists and is readable",
            RatingError::CsvError(_) => {
                "Check that the batch file has the columns order_id,country,subtotal"
            }
            RatingError::SerializationError(_) => "Retry with a different output format",
            RatingError::ConfigValidationError { .. }
            | RatingError::InvalidConfigValueError { .. }
            | RatingError::MissingConfigError { .. } => {
                "Fix the settings file and run `check-config` again"
            }
            RatingError::UnknownServiceCode { .. } => {
                "Use one of the service codes listed by the `services` command"
            }
            RatingError::InvalidShipment { .. } => {
                "Use a two-letter country code and a non-negative subtotal"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Shipping settings are invalid: {}", self),
            ErrorCategory::Input => format!("Shipment could not be rated: {}", self),
            ErrorCategory::System => format!("Unexpected system error: {}", self),
        }
    }

    pub(crate) fn invalid_shipment(message: impl Into<String>) -> Self {
        RatingError::InvalidShipment {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RatingError>;
