use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::analysis::backend::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer for full analyses. Default: RuleBasedAnalyzer.
    /// Swap via ANALYZER_BACKEND.
    pub analyzer: Arc<dyn Analyzer>,
    /// Rule-based components behind the score / suggestions / keywords endpoints.
    pub rules: Arc<ResumeAnalyzer>,
}
