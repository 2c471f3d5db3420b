//! Pluggable analyzer backends, selected at startup by `ANALYZER_BACKEND`.
//!
//! Default: `RuleBasedAnalyzer` (deterministic, no network).
//! Optional: `ExternalModelAnalyzer` (asks the LLM for scores and suggestions and merges
//! them over a rule-based baseline, falling back to that baseline on any failure).
//!
//! `AppState` holds an `Arc<dyn Analyzer>`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::analysis::models::{
    AnalysisMethod, ImprovementSuggestions, ResumeAnalysisResult, ScoreBreakdown,
};
use crate::analysis::prompts::{build_review_prompt, system_prompt};
use crate::analysis::scorer::assemble;
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer capability. Implementations never fail: degraded paths are reported
/// inside the result.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str, job_description: &str) -> ResumeAnalysisResult;

    fn method(&self) -> AnalysisMethod;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct RuleBasedAnalyzer(pub Arc<ResumeAnalyzer>);

#[async_trait]
impl Analyzer for RuleBasedAnalyzer {
    async fn analyze(&self, resume_text: &str, job_description: &str) -> ResumeAnalysisResult {
        self.0.analyze(resume_text, job_description)
    }

    fn method(&self) -> AnalysisMethod {
        AnalysisMethod::RuleBased
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ExternalModelAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Score section of the model response. Lists are optional; scores are required.
#[derive(Debug, Deserialize)]
pub struct ModelScore {
    pub detailed_scores: ScoreBreakdown,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
}

/// Required response schema for the external model.
#[derive(Debug, Deserialize)]
pub struct ModelAssessment {
    pub ats_score: ModelScore,
    #[serde(default)]
    pub suggestions: ImprovementSuggestions,
}

pub struct ExternalModelAnalyzer {
    llm: LlmClient,
    fallback: Arc<ResumeAnalyzer>,
}

impl ExternalModelAnalyzer {
    pub fn new(llm: LlmClient, fallback: Arc<ResumeAnalyzer>) -> Self {
        Self { llm, fallback }
    }
}

#[async_trait]
impl Analyzer for ExternalModelAnalyzer {
    async fn analyze(&self, resume_text: &str, job_description: &str) -> ResumeAnalysisResult {
        let baseline = self.fallback.analyze(resume_text, job_description);

        let prompt = build_review_prompt(resume_text, job_description);
        match self
            .llm
            .call_json::<ModelAssessment>(&system_prompt(), &prompt)
            .await
        {
            Ok(assessment) => {
                let merged = merge_assessment(baseline, assessment);
                info!(
                    overall_score = merged.ats_score.overall_score,
                    "External model analysis merged"
                );
                merged
            }
            Err(e) => {
                warn!("External model analysis failed, using rule-based result: {e}");
                baseline
            }
        }
    }

    fn method(&self) -> AnalysisMethod {
        AnalysisMethod::ExternalModel
    }
}

/// Overlays the model's scores and suggestions on a rule-based baseline.
///
/// Sub-scores are clamped to their ceilings and the overall score and grade are
/// recomputed locally. Statistics, sections and keyword analysis stay rule-based.
/// Empty model lists keep the baseline's lists.
pub fn merge_assessment(
    mut baseline: ResumeAnalysisResult,
    assessment: ModelAssessment,
) -> ResumeAnalysisResult {
    let d = assessment.ats_score.detailed_scores;
    let mut ats_score = assemble(ScoreBreakdown::clamped(
        d.format_score,
        d.keywords_score,
        d.content_score,
        d.sections_score,
    ));

    overlay(&mut ats_score.recommendations, assessment.ats_score.recommendations);
    overlay(&mut ats_score.strengths, assessment.ats_score.strengths);
    overlay(
        &mut ats_score.areas_for_improvement,
        assessment.ats_score.areas_for_improvement,
    );

    let model = assessment.suggestions;
    let s = &mut baseline.suggestions;
    overlay(&mut s.priority_improvements, model.priority_improvements);
    overlay(&mut s.content_suggestions, model.content_suggestions);
    overlay(&mut s.formatting_tips, model.formatting_tips);
    overlay(&mut s.keyword_recommendations, model.keyword_recommendations);
    overlay(&mut s.strengths, model.strengths);
    overlay(&mut s.missing_elements, model.missing_elements);

    baseline.ats_score = ats_score;
    baseline.analysis_method = AnalysisMethod::ExternalModel;
    baseline
}

fn overlay(target: &mut Vec<String>, incoming: Vec<String>) {
    if !incoming.is_empty() {
        *target = incoming;
    }
}
