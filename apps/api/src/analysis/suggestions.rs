//! Rule-based improvement suggestions.
//!
//! Every rule is evaluated independently; one resume can trigger several.

use tracing::warn;

use crate::analysis::error::guard;
use crate::analysis::models::ImprovementSuggestions;
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::vocabulary::Vocabulary;

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;
const MIN_ACTION_VERBS: usize = 3;
const MIN_CORE_SECTIONS: usize = 3;

const FORMATTING_TIPS: &[&str] = &[
    "Use consistent bullet points throughout",
    "Ensure proper spacing between sections",
    "Use a professional font and format",
    "Keep formatting simple for ATS compatibility",
];

const TARGETED_KEYWORD_TIPS: &[&str] = &[
    "Include keywords from the job description",
    "Add industry-specific terminology",
];

const GENERAL_KEYWORD_TIPS: &[&str] = &[
    "Add relevant industry keywords",
    "Include technical skills and competencies",
    "Mention relevant certifications or qualifications",
];

#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    vocabulary: Vocabulary,
    patterns: SignalPatterns,
}

impl SuggestionEngine {
    pub fn new(vocabulary: Vocabulary, patterns: SignalPatterns) -> Self {
        Self {
            vocabulary,
            patterns,
        }
    }

    pub fn suggest(&self, resume_text: &str, job_description: &str) -> ImprovementSuggestions {
        match guard("suggestion engine", || self.compute(resume_text, job_description)) {
            Ok(s) => s,
            Err(e) => {
                warn!("Suggestion generation degraded: {e}");
                ImprovementSuggestions::failed(&e.to_string())
            }
        }
    }

    fn compute(&self, resume_text: &str, job_description: &str) -> ImprovementSuggestions {
        let mut out = ImprovementSuggestions::default();
        let lower = resume_text.to_lowercase();

        let word_count = resume_text.split_whitespace().count();
        if word_count < MIN_WORDS {
            out.priority_improvements
                .push("Expand resume content - current word count is too low".to_string());
        } else if word_count > MAX_WORDS {
            out.priority_improvements
                .push("Consider condensing resume - current word count is very high".to_string());
        }

        if Vocabulary::count_present(self.vocabulary.action_verbs, &lower) < MIN_ACTION_VERBS {
            out.content_suggestions
                .push("Add more strong action verbs to describe accomplishments".to_string());
        } else {
            out.strengths.push("Good use of action verbs".to_string());
        }

        if self.patterns.has_quantifiable(resume_text) {
            out.strengths
                .push("Contains quantifiable achievements".to_string());
        } else {
            out.priority_improvements.push(
                "Add quantifiable achievements with specific numbers or percentages".to_string(),
            );
        }

        if self.patterns.has_email(resume_text) {
            out.strengths.push("Email address found".to_string());
        } else {
            out.missing_elements.push("Email address".to_string());
        }

        if self.patterns.has_phone(resume_text) {
            out.strengths.push("Phone number found".to_string());
        } else {
            out.missing_elements.push("Phone number".to_string());
        }

        let (found, absent): (Vec<&str>, Vec<&str>) = self
            .vocabulary
            .core_sections
            .iter()
            .copied()
            .partition(|s| lower.contains(*s));
        if found.len() >= MIN_CORE_SECTIONS {
            out.strengths
                .push("Resume contains multiple important sections".to_string());
        } else {
            out.missing_elements
                .extend(absent.into_iter().map(str::to_string));
        }

        out.formatting_tips
            .extend(FORMATTING_TIPS.iter().map(|s| s.to_string()));

        let keyword_tips = if job_description.is_empty() {
            GENERAL_KEYWORD_TIPS
        } else {
            TARGETED_KEYWORD_TIPS
        };
        out.keyword_recommendations
            .extend(keyword_tips.iter().map(|s| s.to_string()));

        out
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(Vocabulary::default(), SignalPatterns::new())
    }
}
