//! Generation parameters.

use serde::{Deserialize, Serialize};

use super::GenerateError;

pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Everything a single `generate` call needs besides randomness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub use_numbers: bool,
    pub allow_capital_letters: bool,
    pub use_special_chars: bool,
    pub special_chars_list: String,
    /// Treated as a set of characters, not a substring.
    pub exclude_chars: String,
    pub ensure_one_of_each: bool,
    pub no_consecutive_repeats: bool,
}

impl GenerationConfig {
    /// Fixed-length shorthand.
    pub fn with_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self.max_length = length;
        self
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(GenerateError::InvalidRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_excluded(&self, c: char) -> bool {
        self.exclude_chars.contains(c)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 16,
            use_numbers: true,
            allow_capital_letters: true,
            use_special_chars: true,
            special_chars_list: String::from(DEFAULT_SPECIAL_CHARS),
            exclude_chars: String::new(),
            ensure_one_of_each: true,
            no_consecutive_repeats: false,
        }
    }
}
