//! Global error handling for elves
//!
//! This module provides a centralized error type covering the parser,
//! the materializer and the command-line layer.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Global error type for elves operations
#[derive(Error, Debug)]
pub enum ElvesError {
    /// The document is not valid JSON or does not match the tree shape
    #[error("Failed to parse tree description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document decoded but describes nothing to create
    #[error("Invalid or empty tree description: {0}")]
    EmptyOrInvalidTree(String),

    /// A filesystem operation failed while creating the tree
    #[error("Failed to create {}: {source}", path.display())]
    Materialize {
        /// Path of the entry that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// The tree description could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadDocument {
        /// Path of the tree description
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// File system errors outside the tree walk
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Specialized Result type for elves operations
pub type Result<T> = std::result::Result<T, ElvesError>;

/// Creates an ElvesError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ElvesError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for attaching the attempted path to filesystem errors
pub trait IoResultExt<T> {
    /// Wrap an IO error into [`ElvesError::Materialize`] for `path`
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| ElvesError::Materialize {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ElvesError {
    /// Path attached to a filesystem failure, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ElvesError::Materialize { path, .. } | ElvesError::ReadDocument { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}
