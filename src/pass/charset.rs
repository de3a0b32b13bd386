//! Character classes and pool building.

use super::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";

/// Optional classes, in seeding order. Lowercase is always in the pool and never seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Uppercase,
    Numbers,
    Special,
}

impl Class {
    pub const ALL: [Class; 3] = [Class::Uppercase, Class::Numbers, Class::Special];

    pub fn is_enabled(self, config: &GenerationConfig) -> bool {
        match self {
            Class::Uppercase => config.allow_capital_letters,
            Class::Numbers => config.use_numbers,
            Class::Special => config.use_special_chars,
        }
    }

    fn chars(self, config: &GenerationConfig) -> &str {
        match self {
            Class::Uppercase => UPPERCASE,
            Class::Numbers => NUMBERS,
            Class::Special => &config.special_chars_list,
        }
    }

    /// Class members left after exclusions, de-duplicated in first-seen order.
    pub fn filtered(self, config: &GenerationConfig) -> Vec<char> {
        let mut chars = Vec::new();
        extend_unique(&mut chars, self.chars(config), config);
        chars
    }
}

/// Build the character pool: lowercase plus every enabled class, minus exclusions.
pub fn build(config: &GenerationConfig) -> Vec<char> {
    let mut pool = Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len() + NUMBERS.len());
    extend_unique(&mut pool, LOWERCASE, config);

    for class in Class::ALL {
        if class.is_enabled(config) {
            extend_unique(&mut pool, class.chars(config), config);
        }
    }

    pool
}

/// Effective pool size (for entropy calculation).
pub fn size(config: &GenerationConfig) -> usize {
    build(config).len()
}

fn extend_unique(into: &mut Vec<char>, chars: &str, config: &GenerationConfig) {
    for c in chars.chars() {
        if !config.is_excluded(c) && !into.contains(&c) {
            into.push(c);
        }
    }
}
