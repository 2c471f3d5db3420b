//! Precompiled regexes for contact details and quantified achievements.

use regex::Regex;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";
const PHONE_PATTERN: &str = r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";
/// `40%`, `10+`, `$500`, `5 developers`
const QUANTIFIABLE_PATTERN: &str = r"\d+%|\d+\+|\$\d+|\d+ [a-zA-Z]+";

/// Compiled once per component. `Regex` clones share the compiled program.
#[derive(Debug, Clone)]
pub struct SignalPatterns {
    email: Regex,
    phone: Regex,
    quantifiable: Regex,
}

impl SignalPatterns {
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
            phone: Regex::new(PHONE_PATTERN).expect("phone pattern is valid"),
            quantifiable: Regex::new(QUANTIFIABLE_PATTERN).expect("quantifiable pattern is valid"),
        }
    }

    pub fn has_email(&self, text: &str) -> bool {
        self.email.is_match(text)
    }

    pub fn has_phone(&self, text: &str) -> bool {
        self.phone.is_match(text)
    }

    pub fn has_quantifiable(&self, text: &str) -> bool {
        self.quantifiable.is_match(text)
    }

    /// Non-overlapping quantified-achievement matches.
    pub fn count_quantifiable(&self, text: &str) -> usize {
        self.quantifiable.find_iter(text).count()
    }
}

impl Default for SignalPatterns {
    fn default() -> Self {
        Self::new()
    }
}
