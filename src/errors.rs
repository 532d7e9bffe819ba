use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the invoice renamer
#[derive(Debug)]
pub enum Error {
    /// No file arguments were given on the command line
    NoArguments,
    /// The directory part of a wildcard does not exist or is not a directory
    PathUnavailable { path: PathBuf },
    /// Error related to glob pattern compilation
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// File content could not be decoded as text
    Decoding { path: PathBuf, encoding: String },
    /// Extracted customer token cannot be used in a filename
    InvalidToken { token: String, reason: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoArguments => write!(f, "No files passed at command-line"),
            Error::PathUnavailable { path } => {
                write!(f, "Directory not available: {}", path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::Decoding { path, encoding } => {
                write!(f, "Failed to decode {} as {}", path.display(), encoding)
            }
            Error::InvalidToken { token, reason } => {
                write!(f, "Customer token '{token}' cannot be used in a filename: {reason}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the invoice renamer
///
/// # Examples
/// ```
/// use invoice_rename::prelude::{Result, path_unavailable_error};
/// use std::path::PathBuf;
///
/// fn example_function(exists: bool) -> Result<String> {
///     if exists {
///         Ok("success".to_string())
///     } else {
///         Err(path_unavailable_error(PathBuf::from("missing")))
///     }
/// }
/// # assert!(example_function(true).is_ok());
/// # assert!(example_function(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a no-arguments error
pub fn no_arguments_error() -> Error {
    Error::NoArguments
}

/// Helper function to create a path unavailable error
pub fn path_unavailable_error(path: PathBuf) -> Error {
    Error::PathUnavailable { path }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a decoding error
pub fn decoding_error(path: PathBuf, encoding: &str) -> Error {
    Error::Decoding {
        path,
        encoding: encoding.to_string(),
    }
}

/// Helper function to create an invalid token error
pub fn invalid_token_error(token: &str, reason: &str) -> Error {
    Error::InvalidToken {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}
