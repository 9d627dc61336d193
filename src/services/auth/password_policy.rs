//! Password complexity policy
//!
//! A conforming password has a minimum length and at least one lower case,
//! upper case, numeric and special character.

use crate::error::PolicyViolation;

pub const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Policy requiring `min_length` characters, never fewer than
    /// [`DEFAULT_MIN_LENGTH`]
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(DEFAULT_MIN_LENGTH),
        }
    }

    /// Check a password, reporting the first rule it breaks
    ///
    /// Rules are checked in order: length, lower case, upper case, digit,
    /// special character. Length counts characters, not bytes.
    pub fn check(&self, password: &str) -> Result<(), PolicyViolation> {
        if password.chars().count() < self.min_length {
            return Err(PolicyViolation::TooShort {
                min: self.min_length,
            });
        }
        if !password.chars().any(char::is_lowercase) {
            return Err(PolicyViolation::MissingLowercase);
        }
        if !password.chars().any(char::is_uppercase) {
            return Err(PolicyViolation::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PolicyViolation::MissingDigit);
        }
        if !password.chars().any(is_special) {
            return Err(PolicyViolation::MissingSpecial);
        }
        Ok(())
    }

    /// Criteria text shown next to the new password field
    pub fn description(&self) -> String {
        format!(
            "Your password must be at least {} characters long and contain lower case, upper case, numeric and special characters.",
            self.min_length
        )
    }
}

fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}
