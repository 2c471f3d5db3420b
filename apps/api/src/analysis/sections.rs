use crate::analysis::vocabulary::Vocabulary;

/// Detects canonical resume sections by case-insensitive substring search.
#[derive(Debug, Clone)]
pub struct SectionDetector {
    sections: &'static [&'static str],
}

impl SectionDetector {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            sections: vocabulary.canonical_sections,
        }
    }

    /// Capitalized names of the sections present, in vocabulary order.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.sections
            .iter()
            .filter(|s| lower.contains(*s))
            .map(|s| capitalize(s))
            .collect()
    }
}

impl Default for SectionDetector {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_not_document_order() {
        let text = "SKILLS\nRust\nEXPERIENCE\nAcme\nSummary: engineer";
        let found = SectionDetector::default().detect(text);
        assert_eq!(found, vec!["Summary", "Experience", "Skills"]);
    }

    #[test]
    fn test_contact_is_detected() {
        let found = SectionDetector::default().detect("Contact: me@example.com");
        assert_eq!(found, vec!["Contact"]);
    }

    #[test]
    fn test_empty_text_has_no_sections() {
        assert!(SectionDetector::default().detect("").is_empty());
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "projects" appears inside "subprojects"
        let found = SectionDetector::default().detect("Led subprojects");
        assert_eq!(found, vec!["Projects"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("education"), "Education");
        assert_eq!(capitalize(""), "");
    }
}
