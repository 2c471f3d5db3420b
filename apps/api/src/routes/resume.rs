use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::{
    AtsScore, FileInfo, ImprovementSuggestions, KeywordAnalysis, ResumeAnalysisResult,
};
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::pdf;
use crate::upload::validation::{sanitize_filename, validate_upload, UploadError};

const RESUME_TEXT_REQUIRED: &str = "Resume text is required";
const JOB_DESCRIPTION_REQUIRED: &str = "Job description is required";

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub job_description: Option<String>,
    pub resume_text: Option<String>,
}

struct UploadedResume {
    filename: String,
    data: Bytes,
}

/// POST /api/resume/analyze
///
/// Multipart form: `resume` (PDF file) and optional `job_description` text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResult>, AppError> {
    let mut upload: Option<UploadedResume> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                upload = Some(UploadedResume { filename, data });
            }
            "job_description" => job_description = field.text().await?,
            _ => {}
        }
    }

    let upload = upload.ok_or(UploadError::MissingFile)?;
    validate_upload(&upload.filename, upload.data.len(), state.config.max_upload_bytes)?;

    let size_bytes = upload.data.len();
    let data = upload.data;
    let resume_text = tokio::task::spawn_blocking(move || pdf::extract_text(&data))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let filename = sanitize_filename(&upload.filename);
    info!(filename = %filename, size_bytes, "Analyzing uploaded resume");

    let mut result = state.analyzer.analyze(&resume_text, &job_description).await;
    result.file_info = Some(FileInfo::new(filename, size_bytes));
    Ok(Json(result))
}

/// POST /api/resume/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<AtsScore>, AppError> {
    let resume_text = req
        .resume_text
        .ok_or_else(|| AppError::Validation(RESUME_TEXT_REQUIRED.to_string()))?;
    let job_description = req.job_description.unwrap_or_default();
    Ok(Json(state.rules.scorer().score(&resume_text, &job_description)))
}

/// POST /api/resume/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<ImprovementSuggestions>, AppError> {
    let resume_text = req
        .resume_text
        .ok_or_else(|| AppError::Validation(RESUME_TEXT_REQUIRED.to_string()))?;
    let job_description = req.job_description.unwrap_or_default();
    Ok(Json(
        state
            .rules
            .suggestion_engine()
            .suggest(&resume_text, &job_description),
    ))
}

/// POST /api/resume/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(req): Json<KeywordsRequest>,
) -> Result<Json<KeywordAnalysis>, AppError> {
    let job_description = req
        .job_description
        .ok_or_else(|| AppError::Validation(JOB_DESCRIPTION_REQUIRED.to_string()))?;
    let resume_text = req.resume_text.unwrap_or_default();
    Ok(Json(
        state
            .rules
            .matcher()
            .match_keywords(&job_description, &resume_text),
    ))
}
