//! Password Handling
//!
//! Client-side password handling:
//! - [`ClearTextPassword`] keeps the secret zeroized on drop and out of logs
//! - [`PasswordPolicy`] mirrors the strength rules the identity backend
//!   enforces at registration, so a draft can be rejected before it is sent
//!
//! Passwords are sent exactly as typed. The backend hashes the raw string,
//! so no Unicode normalization is applied here.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::constant_time_eq;

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted by the registration endpoint
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted on the client
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty or whitespace only
    #[error("Password is required")]
    EmptyOrWhitespace,

    /// Password is too short
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters long")]
    TooLong { max: usize, actual: usize },

    /// No upper-case letter
    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    /// No lower-case letter
    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    /// No digit
    #[error("Password must contain a number")]
    MissingDigit,

    /// Control characters are never valid
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("Secret123");
/// assert_eq!(format!("{:?}", password), "ClearTextPassword(\"[REDACTED]\")");
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password as typed. No policy is applied; see [`PasswordPolicy`].
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the secret for request serialization
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the password is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of Unicode code points
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Constant-time equality, used for "confirm password" fields
    pub fn matches(&self, other: &ClearTextPassword) -> bool {
        constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Policy
// ============================================================================

/// Password strength rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    /// Rules enforced by the identity backend's registration endpoint
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

impl PasswordPolicy {
    /// Length-only policy (what the signup form checks on its own)
    pub fn length_only() -> Self {
        Self {
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            ..Self::default()
        }
    }

    /// Check a password against the policy, reporting the first violation
    pub fn check(&self, password: &ClearTextPassword) -> Result<(), PasswordPolicyError> {
        if password.is_blank() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let actual = password.char_count();
        if actual < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
                actual,
            });
        }
        if actual > self.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: self.max_length,
                actual,
            });
        }

        let raw = password.expose();
        if raw.chars().any(|c| c.is_control() && c != '\t') {
            return Err(PasswordPolicyError::InvalidCharacter);
        }
        if self.require_uppercase && !raw.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if self.require_lowercase && !raw.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if self.require_digit && !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str) -> Result<(), PasswordPolicyError> {
        PasswordPolicy::default().check(&ClearTextPassword::new(raw))
    }

    #[test]
    fn test_password_empty() {
        assert_eq!(check(""), Err(PasswordPolicyError::EmptyOrWhitespace));
        assert_eq!(check("        "), Err(PasswordPolicyError::EmptyOrWhitespace));
    }

    #[test]
    fn test_password_too_short() {
        assert!(matches!(
            check("Ab1"),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 3 })
        ));
    }

    #[test]
    fn test_password_too_long() {
        let long = format!("Ab1{}", "x".repeat(MAX_PASSWORD_LENGTH));
        assert!(matches!(check(&long), Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_character_classes() {
        assert_eq!(check("lowercase1"), Err(PasswordPolicyError::MissingUppercase));
        assert_eq!(check("UPPERCASE1"), Err(PasswordPolicyError::MissingLowercase));
        assert_eq!(check("NoDigitsHere"), Err(PasswordPolicyError::MissingDigit));
        assert_eq!(check("Bad\u{0007}Pass1"), Err(PasswordPolicyError::InvalidCharacter));
    }

    #[test]
    fn test_valid_password() {
        assert!(check("Student123").is_ok());
        assert!(check("Pass word 9X").is_ok());
    }

    #[test]
    fn test_length_only_policy() {
        let policy = PasswordPolicy::length_only();
        assert!(policy.check(&ClearTextPassword::new("alllowercase")).is_ok());
        assert!(policy.check(&ClearTextPassword::new("short")).is_err());
    }

    #[test]
    fn test_matches() {
        let a = ClearTextPassword::new("Student123");
        let b = ClearTextPassword::new("Student123");
        let c = ClearTextPassword::new("Student124");
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
