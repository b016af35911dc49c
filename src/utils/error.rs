use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrUtilError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No input strings were provided")]
    NoInput,

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StrUtilError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StrUtilError::IoError(_) => ErrorCategory::Io,
            StrUtilError::TomlError(_) | StrUtilError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            StrUtilError::SerializationError(_)
            | StrUtilError::CsvError(_)
            | StrUtilError::ProcessingError { .. } => ErrorCategory::Data,
            StrUtilError::NoInput => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StrUtilError::NoInput => ErrorSeverity::Low,
            StrUtilError::IoError(_) => ErrorSeverity::Medium,
            StrUtilError::SerializationError(_)
            | StrUtilError::CsvError(_)
            | StrUtilError::ProcessingError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StrUtilError::IoError(e) => format!("Could not read or write a file: {}", e),
            StrUtilError::TomlError(_) => format!("The configuration file is invalid: {}", self),
            StrUtilError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            StrUtilError::NoInput => "Nothing to analyze".to_string(),
            _ => format!("Failed to produce the report: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Configuration => "Review the command-line flags and the --config file",
            ErrorCategory::Data => "Re-run with --verbose and report the failing input",
            ErrorCategory::Input => "Pass strings as arguments or point --input-file at a text file",
        }
    }
}

pub type Result<T> = std::result::Result<T, StrUtilError>;
