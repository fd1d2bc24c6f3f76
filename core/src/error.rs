use std::fmt;
use thiserror::Error;

/// The error type for imgsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument is missing or empty (host, key, salt, url)
    ArgumentInvalid,

    /// Input could not be decoded (malformed hex credentials)
    FormatInvalid,

    /// A directive value is outside of its defined domain
    ValidationFailed,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was caused by caller input and can be fixed by the caller.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ArgumentInvalid | ErrorKind::FormatInvalid | ErrorKind::ValidationFailed
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an argument invalid error
    pub fn argument_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ArgumentInvalid, message)
    }

    /// Create a format invalid error
    pub fn format_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FormatInvalid, message)
    }

    /// Create a validation error for `field`.
    ///
    /// The field name is always part of the message so callers can tell
    /// which value was rejected.
    pub fn validation_failed(field: &str, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::ValidationFailed, format!("{field}: {message}"))
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ArgumentInvalid => write!(f, "invalid argument"),
            ErrorKind::FormatInvalid => write!(f, "invalid format"),
            ErrorKind::ValidationFailed => write!(f, "validation failed"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::format_invalid(format!("hex decode failed: {err}"))
            .with_source(anyhow::Error::from(err))
    }
}
