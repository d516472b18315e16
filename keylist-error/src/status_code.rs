use std::fmt;

use num_enum::TryFromPrimitive;

/// Status codes used to categorize errors.
///
/// # Ranges:
/// - 0xxx: Success
/// - 1xxx: General errors
/// - 2xxx: Data errors
/// - 3xxx: Configuration
/// - 4xxx: Logging / IO
///
/// `num_enum::TryFromPrimitive` provides `TryFrom<u32>`, so a code that was
/// reported as a plain number can be turned back into a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Success ===
    Success = 0,

    // === 1xxx: General errors ===
    Internal = 1000,

    // === 2xxx: Data errors ===
    InvalidData = 2000,

    // === 3xxx: Configuration ===
    InvalidConfig = 3000,
    ConfigNotFound = 3001,

    // === 4xxx: Logging / IO ===
    LoggingInit = 4000,
    Io = 4001,
}

impl StatusCode {
    /// Numeric value of the code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Returns `true` for [`StatusCode::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, StatusCode::Success)
    }

    /// Codes that never describe a caller mistake.
    pub fn is_internal(self) -> bool {
        matches!(self, StatusCode::Internal)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u32() {
        let code = StatusCode::InvalidConfig.code();
        assert_eq!(code, 3000);
        assert_eq!(StatusCode::try_from(code).unwrap(), StatusCode::InvalidConfig);
    }

    #[test]
    fn test_unknown_number_is_rejected() {
        assert!(StatusCode::try_from(9999u32).is_err());
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(StatusCode::InvalidData.to_string(), "2000");
    }

    #[test]
    fn test_internal_classification() {
        assert!(StatusCode::Internal.is_internal());
        assert!(!StatusCode::ConfigNotFound.is_internal());
        assert!(StatusCode::Success.is_success());
    }
}
