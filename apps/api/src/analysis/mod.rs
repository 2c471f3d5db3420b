// Resume analysis engine.
// Implements: keyword extraction, text statistics, section detection, ATS scoring,
// suggestions, keyword matching, and the orchestrating analyzer.
// The rule-based path never touches the network; only backend::ExternalModelAnalyzer
// calls out, and only through llm_client.

pub mod analyzer;
pub mod backend;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod models;
pub mod patterns;
pub mod prompts;
pub mod scorer;
pub mod sections;
pub mod statistics;
pub mod suggestions;
pub mod vocabulary;
