use chrono::Utc;
use tracing::info;

use crate::analysis::matcher::KeywordMatcher;
use crate::analysis::models::{
    AnalysisMethod, AtsScore, ImprovementSuggestions, KeywordAnalysis, ResumeAnalysisResult,
};
use crate::analysis::patterns::SignalPatterns;
use crate::analysis::scorer::AtsScorer;
use crate::analysis::sections::SectionDetector;
use crate::analysis::statistics;
use crate::analysis::suggestions::SuggestionEngine;
use crate::analysis::vocabulary::Vocabulary;

/// The deterministic rule-based analyzer. Immutable after construction, so one instance
/// is shared by every request.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    scorer: AtsScorer,
    suggestions: SuggestionEngine,
    matcher: KeywordMatcher,
    sections: SectionDetector,
}

impl ResumeAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let patterns = SignalPatterns::new();
        Self {
            scorer: AtsScorer::new(vocabulary, patterns.clone()),
            suggestions: SuggestionEngine::new(vocabulary, patterns),
            matcher: KeywordMatcher::new(&vocabulary),
            sections: SectionDetector::new(&vocabulary),
        }
    }

    pub fn scorer(&self) -> &AtsScorer {
        &self.scorer
    }

    pub fn suggestion_engine(&self) -> &SuggestionEngine {
        &self.suggestions
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    /// Runs every component over the inputs. Never fails; component failures surface as
    /// degraded sub-results and the first of them is copied into `error`.
    pub fn analyze(&self, resume_text: &str, job_description: &str) -> ResumeAnalysisResult {
        let ats_score = self.scorer.score(resume_text, job_description);
        let suggestions = self.suggestions.suggest(resume_text, job_description);
        let keywords_analysis = self.matcher.match_keywords(job_description, resume_text);

        let error = first_error(&ats_score, &suggestions, &keywords_analysis);

        info!(
            overall_score = ats_score.overall_score,
            grade = ?ats_score.grade,
            words = resume_text.split_whitespace().count(),
            has_job_description = !job_description.is_empty(),
            "Rule-based analysis complete"
        );

        ResumeAnalysisResult {
            ats_score,
            text_statistics: statistics::compute(resume_text),
            sections_found: self.sections.detect(resume_text),
            suggestions,
            keywords_analysis,
            analysis_timestamp: Utc::now().to_rfc3339(),
            analysis_method: AnalysisMethod::RuleBased,
            file_info: None,
            error,
        }
    }
}

/// The result-level error: the first degraded component, in scorer, suggestions, keywords
/// order.
fn first_error(
    ats_score: &AtsScore,
    suggestions: &ImprovementSuggestions,
    keywords_analysis: &KeywordAnalysis,
) -> Option<String> {
    let reason = if ats_score.is_failed() {
        Some(ats_score.interpretation.clone())
    } else {
        suggestions
            .error
            .clone()
            .or_else(|| keywords_analysis.error.clone())
    };
    reason.map(|e| format!("Analysis failed: {e}"))
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}
