// Prompt constants for the external-model analyzer.
// Reuses the JSON-only fragment from llm_client::prompts.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Persona line prepended to `JSON_ONLY_SYSTEM`.
pub const ATS_REVIEW_PERSONA: &str =
    "You are an expert ATS (Applicant Tracking System) specialist and career counselor. ";

/// Placeholder used when no job description was supplied.
pub const NO_JOB_DESCRIPTION: &str =
    "No specific job description provided - use general ATS criteria";

/// Review prompt template. Replace `{resume_text}` and `{job_description}` before sending.
pub const ATS_REVIEW_PROMPT_TEMPLATE: &str = r#"Evaluate the resume below for ATS compatibility.

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

Score the resume on four dimensions (total 100 points):
1. format_score (max 30): section headers, contact details, bullet points, clean layout.
2. keywords_score (max 25): job-specific terminology, technical skills, industry keywords.
3. content_score (max 25): action verbs, quantified achievements, professional tone.
4. sections_score (max 20): contact, experience, education and skills sections present.

Return a JSON object with this EXACT schema (no extra fields):
{
  "ats_score": {
    "detailed_scores": {
      "format_score": 25,
      "keywords_score": 20,
      "content_score": 22,
      "sections_score": 18
    },
    "recommendations": ["Add more industry-specific keywords"],
    "strengths": ["Well-structured format"],
    "areas_for_improvement": ["Need more specific achievements"]
  },
  "suggestions": {
    "priority_improvements": ["Quantify the impact of the platform migration"],
    "content_suggestions": ["Start each bullet with a strong action verb"],
    "formatting_tips": ["Use consistent bullet points throughout"],
    "keyword_recommendations": ["Mention Kubernetes explicitly"],
    "strengths": ["Clear career progression"],
    "missing_elements": ["Phone number"]
  }
}

Rules:
- Scores are integers and must not exceed the stated maximum for each dimension.
- Every list item is a single short sentence.
- Base every statement on the resume text; do not invent experience."#;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{(resume_text|job_description)\}").expect("placeholder pattern is valid")
    })
}

pub fn system_prompt() -> String {
    format!("{ATS_REVIEW_PERSONA}{JSON_ONLY_SYSTEM}")
}

pub fn build_review_prompt(resume_text: &str, job_description: &str) -> String {
    let job_description = if job_description.trim().is_empty() {
        NO_JOB_DESCRIPTION
    } else {
        job_description
    };
    // one pass over the template, so placeholder text inside the inputs stays literal
    placeholder()
        .replace_all(ATS_REVIEW_PROMPT_TEMPLATE, |caps: &Captures| match &caps[1] {
            "resume_text" => resume_text.to_string(),
            _ => job_description.to_string(),
        })
        .into_owned()
}
