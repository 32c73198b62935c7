//! Branch name templates built around the `{number}` placeholder.

use std::fmt;

use crate::domain::AppError;

/// Placeholder substituted with (or extracted as) the issue number.
pub const NUMBER_PLACEHOLDER: &str = "{number}";

/// Validated branch name template such as `issue-{number}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern(String);

impl NamePattern {
    /// Validate a raw template. It must contain [`NUMBER_PLACEHOLDER`].
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();
        if !raw.contains(NUMBER_PLACEHOLDER) {
            return Err(AppError::InvalidNamePattern { pattern: raw });
        }
        Ok(Self(raw))
    }

    /// Substitute `number` into the first placeholder.
    pub fn render(&self, number: u64) -> String {
        self.0.replacen(NUMBER_PLACEHOLDER, &number.to_string(), 1)
    }

    /// Recover the issue number from a branch name built with this pattern.
    ///
    /// Each literal fragment around the placeholder is removed from `candidate`
    /// once, left to right and in pattern order. Whatever is left must be a
    /// plain run of decimal digits.
    pub fn extract_number(&self, candidate: &str) -> Option<u64> {
        let remainder = self
            .0
            .split(NUMBER_PLACEHOLDER)
            .filter(|fragment| !fragment.is_empty())
            .fold(candidate.to_string(), |acc, fragment| acc.replacen(fragment, "", 1));

        if remainder.is_empty() || !remainder.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        remainder.parse().ok()
    }

    /// Whether `candidate` follows this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.extract_number(candidate).is_some()
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
