//! Coded errors shared by the MealDB tools
//!
//! Library crates that talk to the network keep their own `thiserror` enums.
//! This type covers configuration and filesystem failures, and is also what
//! the CLI folds every failure into before printing it: the code picks the
//! process exit status and the [`ErrorReport`] is the `--format json` shape.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes, grouped by thousands
///
/// | Range | Category |
/// |-------|----------|
/// | 1xxx | General |
/// | 2xxx | IO |
/// | 3xxx | Configuration |
/// | 4xxx | Catalog (remote API) |
/// | 6xxx | Input |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Failure with no more specific code
    Internal = 1001,

    /// Other filesystem failure
    IoError = 2000,
    /// File does not exist
    FileNotFound = 2001,
    /// File exists but cannot be read
    PermissionDenied = 2002,

    /// `--config` names a file that does not exist
    ConfigNotFound = 3001,
    /// Config file is not valid TOML for the schema
    ConfigParseError = 3002,
    /// Config value is out of range
    ConfigValidationError = 3003,

    /// Catalog could not be reached or answered with an error
    NetworkError = 4000,
    /// Catalog has no record for the key
    NotFound = 4004,
    /// A request or lookup ran past its deadline
    Timeout = 4008,
    /// Requests are held back client-side (rate limit or open circuit)
    Throttled = 4029,

    /// Command-line input is unusable
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Numeric code
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Human-readable category
    #[must_use]
    pub fn category(self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            4 => "Catalog",
            6 => "Input",
            _ => "General",
        }
    }

    /// Process exit status for a command failing with this code
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::ConfigNotFound | Self::ConfigParseError | Self::ConfigValidationError => {
                exit_codes::CONFIG_ERROR
            }
            Self::NetworkError | Self::Throttled => exit_codes::NETWORK_ERROR,
            Self::Timeout => exit_codes::TIMEOUT,
            Self::InvalidInput => exit_codes::VALIDATION_ERROR,
            Self::Internal
            | Self::IoError
            | Self::FileNotFound
            | Self::PermissionDenied
            | Self::NotFound => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Exit statuses of the `mealdb` binary
#[allow(missing_docs)]
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const NETWORK_ERROR: i32 = 4;
    pub const TIMEOUT: i32 = 124;
}

/// Error with a code, optional context and a recovery hint
#[derive(Error, Debug)]
pub struct Error {
    /// What went wrong, by family
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Where it happened, e.g. the config file being read
    pub context: Option<String>,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Underlying failure
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {ctx}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Explicitly requested configuration file does not exist
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .mealdb.toml file or pass --config with an existing path")
    }

    /// Configuration value failed validation
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    /// Unusable command-line input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Set the context
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the recovery hint
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the underlying failure
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Machine-readable form for `--format json`
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code.to_string(),
            category: self.code.category(),
            exit_code: self.exit_code(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(ToString::to_string),
        }
    }
}

/// JSON shape of a failed command
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Code as displayed, e.g. `E3003`
    pub code: String,
    /// Code family
    pub category: &'static str,
    /// Process exit status
    pub exit_code: i32,
    /// Human-readable message
    pub message: String,
    /// Where it happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// What the user can do about it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Underlying failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {err}"))
            .with_source(err)
    }
}

/// Attach context to the error of a [`Result`]
pub trait ResultExt<T> {
    /// Set the context of the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
