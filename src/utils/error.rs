use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Price data access failed: {message}")]
    DataAccessError { message: String },

    #[error("Catalog parsing error: {0}")]
    CatalogError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataAccess,
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccessError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DataAccessError { .. } => ErrorCategory::DataAccess,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CatalogError(_) | Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::DataAccess | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::DataAccess | ErrorCategory::Io => {
                "Check that the catalog file exists and is readable"
            }
            ErrorCategory::Serialization => {
                "Check the catalog file syntax (TOML) and price formats"
            }
            ErrorCategory::Configuration => "Run with --help to see valid options",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DataAccessError { message } => {
                format!("Could not read price data: {}", message)
            }
            Self::CatalogError(e) => format!("The catalog file is not valid TOML: {}", e),
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::SerializationError(e) => format!("Could not serialize the report: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
