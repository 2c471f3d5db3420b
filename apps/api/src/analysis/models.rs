use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u32 = 100;
pub const FORMAT_CEILING: u32 = 30;
pub const KEYWORDS_CEILING: u32 = 25;
pub const CONTENT_CEILING: u32 = 25;
pub const SECTIONS_CEILING: u32 = 20;

/// Letter grade derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Grade::A,
            s if s >= 80 => Grade::B,
            s if s >= 70 => Grade::C,
            s if s >= 60 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Grade::A => "Excellent ATS compatibility - resume should pass most ATS systems",
            Grade::B => "Good ATS compatibility with minor improvements needed",
            Grade::C => "Fair ATS compatibility - several improvements recommended",
            Grade::D => "Poor ATS compatibility - significant improvements needed",
            Grade::F => "Very poor ATS compatibility - major revision required",
        }
    }
}

/// Four sub-scores, each already clamped to its ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub format_score: u32,
    pub keywords_score: u32,
    pub content_score: u32,
    pub sections_score: u32,
}

impl ScoreBreakdown {
    /// Builds a breakdown from raw values, clamping each to its ceiling.
    pub fn clamped(format: u32, keywords: u32, content: u32, sections: u32) -> Self {
        Self {
            format_score: format.min(FORMAT_CEILING),
            keywords_score: keywords.min(KEYWORDS_CEILING),
            content_score: content.min(CONTENT_CEILING),
            sections_score: sections.min(SECTIONS_CEILING),
        }
    }

    pub fn total(&self) -> u32 {
        (self.format_score + self.keywords_score + self.content_score + self.sections_score)
            .min(MAX_SCORE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall_score: u32,
    pub max_score: u32,
    pub grade: Grade,
    pub interpretation: String,
    pub detailed_scores: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

impl AtsScore {
    /// Degraded score reported when scoring could not run.
    pub fn failed(reason: &str) -> Self {
        Self {
            overall_score: 0,
            max_score: MAX_SCORE,
            grade: Grade::F,
            interpretation: format!("Scoring failed: {reason}"),
            detailed_scores: ScoreBreakdown::default(),
            recommendations: vec!["Please try again with a valid resume".to_string()],
            strengths: vec![],
            areas_for_improvement: vec![],
        }
    }

    pub fn is_failed(&self) -> bool {
        self.interpretation.starts_with("Scoring failed:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_words_per_sentence: f64,
    pub readability_score: f64,
    /// Minutes, at 200 words per minute.
    pub estimated_reading_time: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub job_description_keywords: Vec<String>,
    pub resume_keywords: Vec<String>,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_density: f64,
    pub match_percentage: f64,
    pub critical_missing_keywords: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub industry_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl KeywordAnalysis {
    pub fn failed(reason: &str) -> Self {
        Self {
            error: Some(format!("Keyword extraction failed: {reason}")),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementSuggestions {
    pub priority_improvements: Vec<String>,
    pub content_suggestions: Vec<String>,
    pub formatting_tips: Vec<String>,
    pub keyword_recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub missing_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImprovementSuggestions {
    pub fn failed(reason: &str) -> Self {
        Self {
            priority_improvements: vec!["Please try again with a valid resume".to_string()],
            strengths: vec!["Resume uploaded successfully".to_string()],
            error: Some(format!("Suggestions generation failed: {reason}")),
            ..Self::default()
        }
    }
}

/// Which analyzer produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    RuleBased,
    ExternalModel,
}

/// Metadata about an uploaded resume file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub filename: String,
    pub size_bytes: usize,
    pub size_mb: f64,
}

impl FileInfo {
    pub fn new(filename: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            filename: filename.into(),
            size_bytes,
            size_mb: round2(size_bytes as f64 / (1024.0 * 1024.0)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysisResult {
    pub ats_score: AtsScore,
    pub text_statistics: TextStatistics,
    pub sections_found: Vec<String>,
    pub suggestions: ImprovementSuggestions,
    pub keywords_analysis: KeywordAnalysis,
    /// RFC 3339, UTC.
    pub analysis_timestamp: String,
    pub analysis_method: AnalysisMethod,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_info: Option<FileInfo>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
