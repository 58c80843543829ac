//! Error types for file, YAML and environment operations.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ParseError,
    IoError,
    ContractViolation,
}

impl ErrorCode {
    /// Process exit code used by the CLI for this class of error.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCode::NotFound => 2,
            ErrorCode::ParseError => 3,
            ErrorCode::IoError => 4,
            ErrorCode::ContractViolation => 5,
        }
    }
}

/// File format that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Dotenv,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "YAML"),
            Format::Dotenv => write!(f, "dotenv"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{what} not found at {}", path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("error parsing {format} file {}: {source}", path.display())]
    Parse {
        format: Format,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("error {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{var} not found after loading {}. Please set it before running.", env_file.display())]
    ContractViolation { var: String, env_file: PathBuf },
}

impl Error {
    pub fn not_found(what: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            what,
            path: path.into(),
        }
    }

    pub fn parse(
        format: Format,
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            format,
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn contract_violation(var: impl Into<String>, env_file: impl Into<PathBuf>) -> Self {
        Self::ContractViolation {
            var: var.into(),
            env_file: env_file.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NotFound { .. } => ErrorCode::NotFound,
            Error::Parse { .. } => ErrorCode::ParseError,
            Error::Io { .. } => ErrorCode::IoError,
            Error::ContractViolation { .. } => ErrorCode::ContractViolation,
        }
    }
}

/// Result type for publication-io operations.
pub type Result<T> = std::result::Result<T, Error>;
