mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::analysis::backend::{Analyzer, ExternalModelAnalyzer, RuleBasedAnalyzer};
use crate::analysis::vocabulary::Vocabulary;
use crate::config::{AnalyzerBackend, Config};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Rule-based components, shared by every endpoint
    let rules = Arc::new(ResumeAnalyzer::new(Vocabulary::default()));

    let analyzer = build_analyzer(&config, rules.clone())?;
    info!("Analyzer backend: {:?}", analyzer.method());

    let state = AppState {
        config: config.clone(),
        analyzer,
        rules,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the full-analysis backend. `Config::from_env` has already checked that the
/// external model has a key.
fn build_analyzer(config: &Config, rules: Arc<ResumeAnalyzer>) -> Result<Arc<dyn Analyzer>> {
    let analyzer: Arc<dyn Analyzer> = match config.analyzer_backend {
        AnalyzerBackend::RuleBased => Arc::new(RuleBasedAnalyzer(rules)),
        AnalyzerBackend::ExternalModel => {
            let llm = LlmClient::new(config.anthropic_api_key.clone().unwrap_or_default())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(ExternalModelAnalyzer::new(llm, rules))
        }
    };
    Ok(analyzer)
}
