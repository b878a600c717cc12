//! Diagnostic codes for categorizing scan failures.
//!
//! # Examples
//!
//! ```
//! use equilex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_MALFORMED_NUMBER;
//! assert_eq!(code.prefix, "E");
//! assert_eq!(code.number, 1003);
//! assert_eq!(code.as_str(), "E1003");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `number` is
/// zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix, "E" for every scan error
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use equilex_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 12);
    /// assert_eq!(code.as_str(), "E0012");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER ERROR CODES (E1001-E1099)
    // =========================================================================

    /// E1001: block comment reaches end of input
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 1001);
    /// E1002: `"` or `$` string reaches end of line or input
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: number with more than one decimal point
    pub const E_MALFORMED_NUMBER: Self = Self::new("E", 1003);
    /// E1004: quoted literal mixing date and time separators
    pub const E_MALFORMED_DATE_OR_TIME: Self = Self::new("E", 1004);
    /// E1005: quoted date or time reaches end of line or input
    pub const E_UNTERMINATED_DATE_OR_TIME: Self = Self::new("E", 1005);
    /// E1006: block comments nested beyond the configured limit
    pub const E_COMMENT_TOO_DEEP: Self = Self::new("E", 1006);
    /// E1007: the source stream could not be read or is not UTF-8
    pub const E_SOURCE_READ: Self = Self::new("E", 1007);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
