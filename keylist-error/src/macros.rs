/// Returns an error from the current function immediately.
///
/// Two forms are supported:
/// - `bail!(err)` takes anything convertible into [`ListError`](crate::ListError);
/// - `bail!(Variant, "fmt {}", arg)` builds a `ListError::Variant` with a
///   formatted message.
///
/// ```ignore
/// use keylist_error::{bail, ListResult};
///
/// fn check_level(level: &str) -> ListResult<()> {
///     if level.is_empty() {
///         bail!(Config, "log level cannot be empty");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {
        return Err($crate::ListError::$variant(format!($fmt $(, $arg)*)))
    };
    ($err:expr) => {
        return Err($crate::ListError::from($err))
    };
}

#[cfg(test)]
mod tests {
    use crate::{ListError, ListResult};

    fn check(level: &str) -> ListResult<()> {
        if level.is_empty() {
            bail!(Config, "log level cannot be empty");
        }
        if level.len() > 5 {
            bail!(Config, "unknown log level: {}", level);
        }
        Ok(())
    }

    #[test]
    fn test_bail_with_message() {
        assert!(matches!(check(""), Err(ListError::Config(_))));
        let err = check("verbose").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: unknown log level: verbose");
        assert!(check("info").is_ok());
    }

    #[test]
    fn test_bail_with_error_value() {
        fn fail() -> ListResult<()> {
            bail!(ListError::ConfigNotFound("keylist.toml".into()));
        }
        assert!(matches!(fail(), Err(ListError::ConfigNotFound(_))));
    }
}
