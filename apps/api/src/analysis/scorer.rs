//! ATS scoring: four capped sub-scores summed into a 0–100 score.
//!
//! | Dimension | Ceiling | Signal |
//! |-----------|---------|--------|
//! | format    | 30 | section headers, email, phone, bullet markers |
//! | keywords  | 25 | share of job-description keywords found in the resume |
//! | content   | 25 | action verbs, quantified achievements, professional terms |
//! | sections  | 20 | experience / education / skills / contact present |
//!
//! Scoring never returns an error to the caller. A panic inside the computation is
//! caught and reported as `AtsScore::failed`, with the reason in `interpretation`.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::analysis::error::guard;
use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::models::{AtsScore, Grade, ScoreBreakdown, MAX_SCORE};
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::vocabulary::Vocabulary;

/// Keyword score when there is no job description to match against.
pub const DEFAULT_KEYWORDS_SCORE: u32 = 15;

const HEADER_POINTS: u32 = 3;
const HEADER_CAP: u32 = 15;
const CONTACT_POINTS: u32 = 5;
const BULLET_POINTS: u32 = 5;
const VERB_POINTS: u32 = 2;
const VERB_CAP: u32 = 10;
const QUANTIFIABLE_POINTS: u32 = 3;
const QUANTIFIABLE_CAP: u32 = 10;
const PROFESSIONAL_CAP: u32 = 5;
const SECTION_POINTS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AtsScorer {
    vocabulary: Vocabulary,
    extractor: KeywordExtractor,
    patterns: SignalPatterns,
}

impl AtsScorer {
    pub fn new(vocabulary: Vocabulary, patterns: SignalPatterns) -> Self {
        Self {
            extractor: KeywordExtractor::new(&vocabulary),
            vocabulary,
            patterns,
        }
    }

    pub fn score(&self, resume_text: &str, job_description: &str) -> AtsScore {
        match guard("ATS scorer", || self.compute(resume_text, job_description)) {
            Ok(score) => score,
            Err(e) => {
                warn!("ATS scoring degraded: {e}");
                AtsScore::failed(&e.to_string())
            }
        }
    }

    fn compute(&self, resume_text: &str, job_description: &str) -> AtsScore {
        let lower = resume_text.to_lowercase();
        let breakdown = ScoreBreakdown::clamped(
            self.format_score(resume_text, &lower),
            self.keywords_score(resume_text, job_description),
            self.content_score(resume_text, &lower),
            self.sections_score(&lower),
        );

        debug!(
            format = breakdown.format_score,
            keywords = breakdown.keywords_score,
            content = breakdown.content_score,
            sections = breakdown.sections_score,
            "ATS sub-scores computed"
        );

        assemble(breakdown)
    }

    pub(crate) fn format_score(&self, text: &str, lower: &str) -> u32 {
        let headers = Vocabulary::count_present(self.vocabulary.format_headers, lower) as u32;
        let mut score = (headers * HEADER_POINTS).min(HEADER_CAP);

        if self.patterns.has_email(text) {
            score += CONTACT_POINTS;
        }
        if self.patterns.has_phone(text) {
            score += CONTACT_POINTS;
        }
        if text.contains(self.vocabulary.bullet_markers) {
            score += BULLET_POINTS;
        }
        score
    }

    pub(crate) fn keywords_score(&self, resume_text: &str, job_description: &str) -> u32 {
        if job_description.is_empty() {
            return DEFAULT_KEYWORDS_SCORE;
        }
        let job_keywords = self.extractor.extract(job_description);
        if job_keywords.is_empty() {
            return DEFAULT_KEYWORDS_SCORE;
        }
        let resume_keywords: HashSet<String> =
            self.extractor.extract(resume_text).into_iter().collect();

        let job_set: HashSet<&String> = job_keywords.iter().collect();
        let matched = job_set.iter().filter(|k| resume_keywords.contains(**k)).count();

        // job_keywords is already de-duplicated, so its length is the set size
        let match_ratio = matched as f64 / job_keywords.len() as f64;
        (match_ratio * 25.0).floor() as u32
    }

    pub(crate) fn content_score(&self, text: &str, lower: &str) -> u32 {
        let verbs = Vocabulary::count_present(self.vocabulary.action_verbs, lower) as u32;
        let quantified = self.patterns.count_quantifiable(text) as u32;
        let terms = Vocabulary::count_present(self.vocabulary.professional_terms, lower) as u32;

        (verbs * VERB_POINTS).min(VERB_CAP)
            + quantified.saturating_mul(QUANTIFIABLE_POINTS).min(QUANTIFIABLE_CAP)
            + terms.min(PROFESSIONAL_CAP)
    }

    pub(crate) fn sections_score(&self, lower: &str) -> u32 {
        Vocabulary::count_present(self.vocabulary.required_sections, lower) as u32 * SECTION_POINTS
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new(Vocabulary::default(), SignalPatterns::new())
    }
}

/// Turns a clamped breakdown into a full score with grade and threshold messages.
pub fn assemble(breakdown: ScoreBreakdown) -> AtsScore {
    let overall_score = breakdown.total();
    let grade = Grade::from_score(overall_score);

    AtsScore {
        overall_score,
        max_score: MAX_SCORE,
        grade,
        interpretation: grade.interpretation().to_string(),
        detailed_scores: breakdown,
        recommendations: recommendations(&breakdown),
        strengths: strengths(&breakdown),
        areas_for_improvement: areas_for_improvement(&breakdown),
    }
}

fn recommendations(b: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();
    if b.format_score < 20 {
        out.push("Improve resume formatting and structure".to_string());
    }
    if b.keywords_score < 15 {
        out.push("Add more relevant keywords".to_string());
    }
    if b.content_score < 15 {
        out.push("Enhance content with action verbs and achievements".to_string());
    }
    if b.sections_score < 15 {
        out.push("Include all essential resume sections".to_string());
    }
    out
}

fn strengths(b: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();
    if b.format_score >= 25 {
        out.push("Well-structured format".to_string());
    }
    if b.keywords_score >= 20 {
        out.push("Good keyword optimization".to_string());
    }
    if b.content_score >= 20 {
        out.push("High-quality content".to_string());
    }
    if b.sections_score >= 18 {
        out.push("Complete resume sections".to_string());
    }
    out
}

fn areas_for_improvement(b: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();
    if b.format_score < 20 {
        out.push("Format and structure need work".to_string());
    }
    if b.keywords_score < 15 {
        out.push("Missing relevant keywords".to_string());
    }
    if b.content_score < 15 {
        out.push("Content quality could be enhanced".to_string());
    }
    if b.sections_score < 15 {
        out.push("Missing essential sections".to_string());
    }
    out
}
