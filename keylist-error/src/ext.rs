use std::{any::Any, error::Error};

use crate::StatusCode;

/// Extension trait for keylist errors (object-safe).
///
/// Provides helpers on top of [`std::error::Error`]:
/// - the status code,
/// - a message that is safe to show to a caller,
/// - a detailed message for logs.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Status code of the error.
    ///
    /// Defaults to [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Returns the error as [`Any`](std::any::Any) for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Message without implementation details. Internal errors collapse to
    /// `"Internal error"`.
    fn client_message(&self) -> String {
        if self.status_code().is_internal() {
            "Internal error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Detailed message for logs.
    fn log_message(&self) -> String {
        format!("{self:?}")
    }

    /// Short type name of the error.
    fn type_name(&self) -> String {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
            .to_string()
    }
}
