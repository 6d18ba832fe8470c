use thiserror::Error;

pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while ingesting resume uploads.
///
/// The per-file variants (`UnsupportedPdf`, `UnsupportedFormat`,
/// `ExtractionFailure`) display the exact strings the caller surfaces in
/// the batch error list; extraction detail is carried for logging only and
/// never shown to the user.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("PDF parsing is not supported in this environment")]
    UnsupportedPdf,

    #[error("Unsupported file type")]
    UnsupportedFormat,

    #[error("Error parsing file")]
    ExtractionFailure { message: String },

    #[error("File too large: {size}MB exceeds limit of {limit}MB")]
    FileTooLarge { size: usize, limit: usize },

    #[error("No job description has been saved for this session")]
    NoJobDefined,

    #[error("A job description has already been saved for this session")]
    JobAlreadyDefined,

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl IngestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            IngestError::UnsupportedPdf => "UNSUPPORTED_PDF",
            IngestError::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            IngestError::ExtractionFailure { .. } => "EXTRACTION_FAILURE",
            IngestError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            IngestError::NoJobDefined => "NO_JOB_DEFINED",
            IngestError::JobAlreadyDefined => "JOB_ALREADY_DEFINED",
            IngestError::ValidationError { .. } => "VALIDATION_ERROR",
            IngestError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }

    /// Underlying detail for log output, if the variant carries any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            IngestError::ExtractionFailure { message } => Some(message),
            IngestError::ValidationError { message } => Some(message),
            IngestError::ConfigError { message } => Some(message),
            _ => None,
        }
    }
}

// Helper methods for creating specific errors
impl IngestError {
    pub fn extraction(message: impl Into<String>) -> Self {
        IngestError::ExtractionFailure {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        IngestError::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        IngestError::ConfigError {
            message: message.into(),
        }
    }
}
