use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Missing input '{field}': {reason}")]
    MissingInputError { field: String, reason: String },

    #[error("Invalid input '{field}' = '{value}': {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者輸入錯誤，可直接修正
    Input,
    /// 配置或檔案系統錯誤
    Environment,
}

impl GrowthError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GrowthError::MissingInputError { .. } | GrowthError::InvalidInputError { .. } => {
                ErrorSeverity::Input
            }
            _ => ErrorSeverity::Environment,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Input => 1,
            ErrorSeverity::Environment => 2,
        }
    }

    /// 給終端使用者看的訊息（驗證錯誤直接顯示修正提示）
    pub fn user_friendly_message(&self) -> String {
        match self {
            GrowthError::MissingInputError { reason, .. }
            | GrowthError::InvalidInputError { reason, .. } => reason.clone(),
            GrowthError::IoError(e) => format!("Could not read or write a file: {}", e),
            GrowthError::CsvError(e) => format!("The CSV file could not be processed: {}", e),
            GrowthError::SerializationError(e) => format!("Could not serialize the result: {}", e),
            GrowthError::FormatError(e) => format!("Could not format the result: {}", e),
            GrowthError::ConfigError { message } => message.clone(),
            GrowthError::ConfigParseError { message, .. } => {
                format!("The profile file is not valid: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GrowthError::MissingInputError { .. } => {
                "Provide the missing value with a flag or in the [subject]/[parents] profile sections"
            }
            GrowthError::InvalidInputError { .. } => "Correct the value and run again",
            GrowthError::IoError(_) => "Check that the path exists and is writable",
            GrowthError::CsvError(_) => {
                "Check the header: age,sex,current_height,father_height,mother_height"
            }
            GrowthError::SerializationError(_) | GrowthError::FormatError(_) => {
                "Try another output format"
            }
            GrowthError::ConfigError { .. } | GrowthError::ConfigParseError { .. } => {
                "Check the profile file against the documented TOML layout"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_show_reason_and_exit_one() {
        let err = GrowthError::InvalidInputError {
            field: "age".to_string(),
            value: "7".to_string(),
            reason: "Enter an age between 8 and 20 years.".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Input);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.user_friendly_message(), "Enter an age between 8 and 20 years.");
    }

    #[test]
    fn test_io_errors_are_environment_errors() {
        let err: GrowthError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Environment);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_format_errors_are_environment_errors() {
        let err: GrowthError = std::fmt::Error.into();
        assert_eq!(err.severity(), ErrorSeverity::Environment);
        assert_eq!(err.recovery_suggestion(), "Try another output format");
    }
}
