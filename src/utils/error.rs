use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Submission rejected with status {status}: {message}")]
    SubmissionError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::ApiError(_) | CalcError::SubmissionError { .. } => ErrorCategory::Network,
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::CsvError(_) | CalcError::SerializationError(_) => ErrorCategory::Data,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::ApiError(_) => "Check your network connection and the contact endpoint, then retry",
            CalcError::SubmissionError { status, .. } if *status >= 500 => {
                "The form service is unavailable, try again later"
            }
            CalcError::SubmissionError { .. } => "Fill in every required field with a valid e-mail address",
            CalcError::IoError(_) => "Check that the file exists and that you have permission to access it",
            CalcError::CsvError(_) | CalcError::SerializationError(_) => {
                "Try another output format or output location"
            }
            CalcError::ConfigValidationError { .. } => "Make sure the configuration file is valid TOML",
            CalcError::InvalidConfigValueError { .. } => "Correct the highlighted configuration value",
            CalcError::MissingConfigError { .. } => "Add the missing setting to the configuration file",
            CalcError::ValidationError { .. } => "Check the values you entered and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::ApiError(_) => "Could not reach the contact service".to_string(),
            CalcError::SubmissionError { message, .. } => format!("Your message was not accepted: {}", message),
            CalcError::IoError(e) => format!("File access failed: {}", e),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CalcError::MissingConfigError { field } => format!("Setting '{}' is required", field),
            CalcError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let config = CalcError::MissingConfigError {
            field: "plans".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.severity(), ErrorSeverity::Critical);

        let input = CalcError::ValidationError {
            message: "bad".to_string(),
        };
        assert_eq!(input.severity(), ErrorSeverity::High);

        let rejected = CalcError::SubmissionError {
            status: 400,
            message: "Missing required fields".to_string(),
        };
        assert_eq!(rejected.category(), ErrorCategory::Network);
        assert!(rejected.user_friendly_message().contains("Missing required fields"));
    }
}
