use thiserror::Error;
use crate::enums::ui_language::UiLanguage;
use crate::enums::upload_error_kind::UploadErrorKind;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    #[error("Upload rejected: {0}")]
    UploadError(#[from] UploadErrorKind),

    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    #[error("Report '{id}' not found")]
    ReportNotFound {
        id: String,
    },

    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        reason: String,
    },

    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl AnalyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Upload kind shown to the user; anything that is not an upload problem is `Unexpected`.
    pub fn upload_kind(&self) -> UploadErrorKind {
        match self {
            Self::UploadError(kind) => kind.clone(),
            _ => UploadErrorKind::Unexpected,
        }
    }

    pub fn user_message(&self, language: UiLanguage) -> String {
        self.upload_kind().user_message(language)
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::ConfigurationError { suggestion, .. } => suggestion.as_deref(),
            Self::ConfigurationFileError { .. } => Some("Check file permissions and syntax"),
            _ => None,
        }
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl From<std::io::Error> for AnalyzerError {
    fn from(error: std::io::Error) -> Self {
        AnalyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(error: serde_json::Error) -> Self {
        AnalyzerError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        AnalyzerError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}
