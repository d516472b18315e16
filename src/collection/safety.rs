use std::any::Any;

use keylist_error::{ErrorExt, ListError, StatusCode};
use thiserror::Error;

/// Checks an invariant in debug builds.
///
/// Compiles to a no-op in release builds.
#[macro_export]
macro_rules! debug_assert_invariant {
    ($cond:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if !$cond {
                panic!("Invariant violation: {}", format!($($arg)*));
            }
        }
    };
}

/// Broken key layout found by
/// [`OrderedCollection::validate_invariants`](super::OrderedCollection::validate_invariants).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The recorded length differs from the number of stored keys.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A key inside `0..len` has no item.
    ///
    /// With the counts in agreement this also covers stray keys outside
    /// `0..len`, since each one leaves a hole inside the range.
    #[error("Missing key {key}")]
    MissingKey { key: i64 },
}

impl ErrorExt for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::InvalidData
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<ValidationError> for ListError {
    fn from(err: ValidationError) -> Self {
        ListError::Validation(err.to_string())
    }
}
