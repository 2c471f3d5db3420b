//! Keyword matching between a job description and a resume.
//!
//! Set results (`matching_keywords`, `missing_keywords`) are reported in the order of the
//! job-description keyword ranking so repeated calls produce identical output.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::analysis::error::guard;
use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::models::{round2, KeywordAnalysis};
use crate::analysis::vocabulary::Vocabulary;

const REPORTED_KEYWORDS: usize = 20;
const REPORTED_MISSING: usize = 10;
const CRITICAL_MISSING: usize = 5;

const FALLBACK_KEYWORD_SUGGESTIONS: &[&str] = &[
    "Add more industry-specific technical terms",
    "Include relevant certification names",
    "Mention specific tools and technologies used",
];

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    extractor: KeywordExtractor,
    industry_keywords: &'static [&'static str],
}

impl KeywordMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            extractor: KeywordExtractor::new(vocabulary),
            industry_keywords: vocabulary.industry_keywords,
        }
    }

    /// Note the argument order: job description first.
    pub fn match_keywords(&self, job_description: &str, resume_text: &str) -> KeywordAnalysis {
        match guard("keyword matcher", || self.compute(job_description, resume_text)) {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Keyword matching degraded: {e}");
                KeywordAnalysis::failed(&e.to_string())
            }
        }
    }

    fn compute(&self, job_description: &str, resume_text: &str) -> KeywordAnalysis {
        let resume_keywords = self.extractor.extract(resume_text);
        let job_keywords = if job_description.is_empty() {
            vec![]
        } else {
            self.extractor.extract(job_description)
        };

        let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();
        let (matching, missing): (Vec<String>, Vec<String>) = job_keywords
            .iter()
            .cloned()
            .partition(|k| resume_set.contains(k.as_str()));

        let match_percentage = if job_keywords.is_empty() {
            0.0
        } else {
            matching.len() as f64 / job_keywords.len() as f64 * 100.0
        };

        let word_count = resume_text.split_whitespace().count();
        let keyword_density = if word_count == 0 {
            0.0
        } else {
            resume_keywords.len() as f64 / word_count as f64 * 100.0
        };

        debug!(
            job_keywords = job_keywords.len(),
            resume_keywords = resume_keywords.len(),
            matching = matching.len(),
            "Keyword match computed"
        );

        KeywordAnalysis {
            keyword_suggestions: keyword_suggestions(&missing),
            job_description_keywords: truncated(&job_keywords, REPORTED_KEYWORDS),
            resume_keywords: truncated(&resume_keywords, REPORTED_KEYWORDS),
            critical_missing_keywords: truncated(&missing, CRITICAL_MISSING),
            missing_keywords: truncated(&missing, REPORTED_MISSING),
            matching_keywords: matching,
            keyword_density: round2(keyword_density),
            match_percentage: round2(match_percentage),
            industry_keywords: self.industry_keywords.iter().map(|s| s.to_string()).collect(),
            error: None,
        }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

fn truncated(keywords: &[String], n: usize) -> Vec<String> {
    keywords.iter().take(n).cloned().collect()
}

fn keyword_suggestions(missing: &[String]) -> Vec<String> {
    if missing.is_empty() {
        return FALLBACK_KEYWORD_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect();
    }
    missing
        .iter()
        .take(CRITICAL_MISSING)
        .map(|k| format!("Consider adding '{k}' to relevant sections"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_example() {
        let a = KeywordMatcher::default().match_keywords(
            "python sql machine learning",
            "python developer with sql experience",
        );
        assert_eq!(a.job_description_keywords, vec!["python", "sql", "machine", "learning"]);
        assert_eq!(
            a.resume_keywords,
            vec!["python", "developer", "with", "sql", "experience"]
        );
        assert_eq!(a.matching_keywords, vec!["python", "sql"]);
        assert_eq!(a.missing_keywords, vec!["machine", "learning"]);
        assert_eq!(a.match_percentage, 50.0);
        assert_eq!(a.keyword_density, 100.0);
        assert_eq!(
            a.keyword_suggestions,
            vec![
                "Consider adding 'machine' to relevant sections",
                "Consider adding 'learning' to relevant sections",
            ]
        );
    }

    #[test]
    fn test_no_job_description() {
        let a = KeywordMatcher::default().match_keywords("", "python developer");
        assert!(a.job_description_keywords.is_empty());
        assert!(a.matching_keywords.is_empty());
        assert!(a.missing_keywords.is_empty());
        assert_eq!(a.match_percentage, 0.0);
        assert_eq!(a.keyword_suggestions.len(), 3);
        assert_eq!(a.industry_keywords.len(), 12);
    }

    #[test]
    fn test_empty_and_blank_resume_have_zero_density() {
        let m = KeywordMatcher::default();
        assert_eq!(m.match_keywords("rust", "").keyword_density, 0.0);
        assert_eq!(m.match_keywords("rust", "   \n").keyword_density, 0.0);
    }

    #[test]
    fn test_missing_truncation() {
        let jd: String = (0..15).map(|i| format!("skill{i:02} ")).collect();
        let a = KeywordMatcher::default().match_keywords(&jd, "nothing relevant");
        assert_eq!(a.missing_keywords.len(), 10);
        assert_eq!(a.critical_missing_keywords.len(), 5);
        assert_eq!(a.keyword_suggestions.len(), 5);
        assert_eq!(a.critical_missing_keywords[0], "skill00");
    }

    #[test]
    fn test_is_deterministic() {
        let m = KeywordMatcher::default();
        let jd = "Senior Rust engineer: tokio, axum, postgres, kafka, kubernetes, observability";
        let cv = "Built axum services on tokio with postgres; ran kafka consumers";
        let a = serde_json::to_value(m.match_keywords(jd, cv)).unwrap();
        let b = serde_json::to_value(m.match_keywords(jd, cv)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_percentages_rounded() {
        let a = KeywordMatcher::default().match_keywords("alpha beta gamma", "alpha");
        assert_eq!(a.match_percentage, 33.33);
    }

    #[test]
    fn test_very_long_resume_is_matched() {
        let resume = "python developer with sql experience and kafka pipelines\n".repeat(1000);
        assert!(resume.chars().count() > 50_000);

        let a = KeywordMatcher::default().match_keywords("python sql machine learning", &resume);
        assert!(a.error.is_none());
        assert_eq!(a.matching_keywords, vec!["python", "sql"]);
        assert_eq!(a.match_percentage, 50.0);
    }
}
