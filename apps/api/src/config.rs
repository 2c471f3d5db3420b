use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::upload::validation::DEFAULT_MAX_UPLOAD_BYTES;

/// Which analyzer serves `/api/resume/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerBackend {
    RuleBased,
    ExternalModel,
}

impl FromStr for AnalyzerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule_based" | "rule-based" | "rules" => Ok(AnalyzerBackend::RuleBased),
            "external_model" | "external-model" | "llm" => Ok(AnalyzerBackend::ExternalModel),
            other => bail!("Unknown ANALYZER_BACKEND '{other}' (expected rule_based or external_model)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values, or when the external model is selected
/// without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analyzer_backend: AnalyzerBackend,
    pub anthropic_api_key: Option<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let analyzer_backend = match lookup("ANALYZER_BACKEND") {
            Some(v) => v.parse()?,
            None => AnalyzerBackend::RuleBased,
        };

        let anthropic_api_key = lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty());
        if analyzer_backend == AnalyzerBackend::ExternalModel && anthropic_api_key.is_none() {
            bail!("ANALYZER_BACKEND=external_model requires ANTHROPIC_API_KEY to be set");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            analyzer_backend,
            anthropic_api_key,
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            analyzer_backend: AnalyzerBackend::RuleBased,
            anthropic_api_key: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.analyzer_backend, AnalyzerBackend::RuleBased);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn test_external_model_requires_key() {
        let err = Config::from_lookup(lookup(&[("ANALYZER_BACKEND", "external_model")])).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));

        let config = Config::from_lookup(lookup(&[
            ("ANALYZER_BACKEND", "external_model"),
            ("ANTHROPIC_API_KEY", "sk-test"),
        ]))
        .unwrap();
        assert_eq!(config.analyzer_backend, AnalyzerBackend::ExternalModel);
    }

    #[test]
    fn test_unknown_backend() {
        assert!(Config::from_lookup(lookup(&[("ANALYZER_BACKEND", "magic")])).is_err());
    }

    #[test]
    fn test_backend_aliases() {
        assert_eq!("LLM".parse::<AnalyzerBackend>().unwrap(), AnalyzerBackend::ExternalModel);
        assert_eq!("rule-based".parse::<AnalyzerBackend>().unwrap(), AnalyzerBackend::RuleBased);
    }
}
