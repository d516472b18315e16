use std::{any::Any, io, path::PathBuf};

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

pub type ListResult<T> = Result<T, ListError>;

/// Top-level error of the keylist crates.
///
/// Collection operations themselves never fail: boundary conditions are
/// reported with `None`. This type covers the surrounding machinery.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invariant violation: {0}")]
    Validation(String),

    #[error("Logging initialization failed: {0}")]
    Logging(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ErrorExt for ListError {
    fn status_code(&self) -> StatusCode {
        match self {
            ListError::Config(_) => StatusCode::InvalidConfig,
            ListError::Validation(_) => StatusCode::InvalidData,
            ListError::Logging(_) => StatusCode::LoggingInit,
            ListError::ConfigNotFound(_) => StatusCode::ConfigNotFound,
            ListError::Io { .. } => StatusCode::Io,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
