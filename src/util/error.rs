// LogTranslator - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps its cause so the
// full chain can be logged.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTranslator operations.
#[derive(Debug)]
pub enum LogTranslatorError {
    /// Translation setup or execution failed.
    Translate(TranslateError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for LogTranslatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate(e) => write!(f, "Translation error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for LogTranslatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Translate(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Translate errors
// ---------------------------------------------------------------------------

/// Errors raised while preparing or running a translation.
///
/// The substitution itself is total; these only cover rule compilation and
/// the background worker.
#[derive(Debug)]
pub enum TranslateError {
    /// A substitution rule did not compile.
    InvalidPattern {
        keyword: String,
        source: regex::Error,
    },

    /// The background worker thread could not be spawned.
    WorkerSpawn { source: io::Error },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { keyword, source } => {
                write!(f, "Invalid substitution rule for '{keyword}': {source}")
            }
            Self::WorkerSpawn { source } => {
                write!(f, "Could not start translation worker: {source}")
            }
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::WorkerSpawn { source } => Some(source),
        }
    }
}

impl From<TranslateError> for LogTranslatorError {
    fn from(e: TranslateError) -> Self {
        Self::Translate(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for LogTranslatorError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogTranslator results.
pub type Result<T> = std::result::Result<T, LogTranslatorError>;
