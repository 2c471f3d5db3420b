//! Word lists shared by every analysis component.
//!
//! A `Vocabulary` is an immutable value handed to each component at construction.
//! Nothing in the analysis module reads word lists from globals, so a component can be
//! built against a trimmed vocabulary in tests without touching the others.

/// Tokens dropped by the keyword extractor even when they pass the length filter.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "way", "who", "boy", "did", "let", "put", "say", "she", "too", "use",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "improved",
    "designed",
    "executed",
    "delivered",
];

pub const PROFESSIONAL_TERMS: &[&str] = &[
    "responsible",
    "collaborated",
    "coordinated",
    "analyzed",
    "optimized",
];

/// Canonical section vocabulary, in reporting order.
pub const CANONICAL_SECTIONS: &[&str] = &[
    "summary",
    "objective",
    "experience",
    "education",
    "skills",
    "certifications",
    "projects",
    "achievements",
    "contact",
];

/// Headers that earn format points (3 each, capped at 15).
pub const FORMAT_HEADERS: &[&str] = &["experience", "education", "skills", "summary", "contact"];

/// Sections that earn completeness points (5 each). `contact` is matched literally.
pub const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills", "contact"];

/// Sections the suggestion engine looks for before listing the absent ones.
pub const CORE_SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "objective"];

pub const BULLET_MARKERS: &[char] = &['•', '*', '-'];

pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "leadership",
    "management",
    "development",
    "analysis",
    "design",
    "implementation",
    "optimization",
    "collaboration",
    "communication",
    "problem-solving",
    "project management",
    "strategic planning",
];

#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub stop_words: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
    pub professional_terms: &'static [&'static str],
    pub canonical_sections: &'static [&'static str],
    pub format_headers: &'static [&'static str],
    pub required_sections: &'static [&'static str],
    pub core_sections: &'static [&'static str],
    pub bullet_markers: &'static [char],
    pub industry_keywords: &'static [&'static str],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS,
            action_verbs: ACTION_VERBS,
            professional_terms: PROFESSIONAL_TERMS,
            canonical_sections: CANONICAL_SECTIONS,
            format_headers: FORMAT_HEADERS,
            required_sections: REQUIRED_SECTIONS,
            core_sections: CORE_SECTIONS,
            bullet_markers: BULLET_MARKERS,
            industry_keywords: INDUSTRY_KEYWORDS,
        }
    }
}

impl Vocabulary {
    /// Number of `terms` that occur as substrings of the already-lowercased `text_lower`.
    pub fn count_present(terms: &[&str], text_lower: &str) -> usize {
        terms.iter().filter(|t| text_lower.contains(*t)).count()
    }
}
