//! Display Name Value Object
//!
//! The user-facing profile name. Unlike a login handle it is free-form:
//! any script is allowed, it only has to be printable and of sane length.
//!
//! ## Invariants
//! - Length: 2..=100 characters after trim + NFKC normalization
//! - No control characters

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for a display name (in characters)
pub const DISPLAY_NAME_MIN_LENGTH: usize = 2;

/// Maximum length for a display name (in characters)
pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

/// Error returned when display name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNameError {
    /// Name is empty after normalization
    Empty,

    /// Name is too short
    TooShort { length: usize, min: usize },

    /// Name is too long
    TooLong { length: usize, max: usize },

    /// Name contains control characters
    InvalidCharacter,
}

impl fmt::Display for DisplayNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name cannot be empty"),
            Self::TooShort { length, min } => {
                write!(f, "Name is too short ({length} chars, minimum {min})")
            }
            Self::TooLong { length, max } => {
                write!(f, "Name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter => write!(f, "Name contains invalid characters"),
        }
    }
}

impl std::error::Error for DisplayNameError {}

/// Validated, normalized display name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new DisplayName from raw input
    ///
    /// Applies normalization (NFKC, trim) and validates length.
    pub fn new(input: impl AsRef<str>) -> Result<Self, DisplayNameError> {
        let normalized = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(DisplayNameError::Empty);
        }

        let length = normalized.chars().count();
        if length < DISPLAY_NAME_MIN_LENGTH {
            return Err(DisplayNameError::TooShort {
                length,
                min: DISPLAY_NAME_MIN_LENGTH,
            });
        }
        if length > DISPLAY_NAME_MAX_LENGTH {
            return Err(DisplayNameError::TooLong {
                length,
                max: DISPLAY_NAME_MAX_LENGTH,
            });
        }

        if normalized.chars().any(|c| c.is_control()) {
            return Err(DisplayNameError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Create from database value (assumes already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DisplayName").field(&self.0).finish()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = DisplayNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        let name = DisplayName::new("  Ann  ").unwrap();
        assert_eq!(name.as_str(), "Ann");
    }

    #[test]
    fn test_case_preserved() {
        // Display names are not handles: case survives normalization
        let name = DisplayName::new("Ann McTest").unwrap();
        assert_eq!(name.as_str(), "Ann McTest");
    }

    #[test]
    fn test_unicode_names() {
        assert!(DisplayName::new("山田 太郎").is_ok());
        assert!(DisplayName::new("Zoë").is_ok());
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(DisplayName::new(""), Err(DisplayNameError::Empty)));
        assert!(matches!(
            DisplayName::new("   "),
            Err(DisplayNameError::Empty)
        ));
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            DisplayName::new("A"),
            Err(DisplayNameError::TooShort { length: 1, min: 2 })
        ));
    }

    #[test]
    fn test_minimum_length() {
        assert!(DisplayName::new("Al").is_ok());
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(DISPLAY_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            DisplayName::new(&input),
            Err(DisplayNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_control_characters_fail() {
        assert!(matches!(
            DisplayName::new("Ann\u{0007}"),
            Err(DisplayNameError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = DisplayName::new("Ann").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Ann\"");

        let back: DisplayName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<DisplayName, _> = serde_json::from_str("\"A\"");
        assert!(result.is_err());
    }
}
