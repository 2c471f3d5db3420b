pub mod health;
pub mod resume;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Multipart framing and the job description field ride on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/resume/analyze", post(resume::handle_analyze))
        .route("/api/resume/score", post(resume::handle_score))
        .route("/api/resume/suggestions", post(resume::handle_suggestions))
        .route("/api/resume/keywords", post(resume::handle_keywords))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::analyzer::ResumeAnalyzer;
    use crate::analysis::backend::RuleBasedAnalyzer;
    use crate::analysis::vocabulary::Vocabulary;
    use crate::config::Config;

    const BOUNDARY: &str = "resume-ats-test-boundary";

    fn test_router() -> Router {
        let rules = Arc::new(ResumeAnalyzer::new(Vocabulary::default()));
        build_router(AppState {
            config: Config::default(),
            analyzer: Arc::new(RuleBasedAnalyzer(rules.clone())),
            rules,
        })
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(filename: Option<&str>, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        if let Some(filename) = filename {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_description\"\r\n\r\npython developer\r\n--{BOUNDARY}--\r\n"
            )
            .as_bytes(),
        );

        Request::builder()
            .method("POST")
            .uri("/api/resume/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "resume-ats");
    }

    #[tokio::test]
    async fn test_score_endpoint() {
        let request = json_request(
            "/api/resume/score",
            json!({ "resume_text": "", "job_description": "" }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["overall_score"], 15);
        assert_eq!(body["grade"], "F");
        assert_eq!(body["max_score"], 100);
    }

    #[tokio::test]
    async fn test_score_requires_resume_text() {
        let request = json_request("/api/resume/score", json!({ "job_description": "rust" }));
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Resume text is required");
    }

    #[tokio::test]
    async fn test_null_job_description_counts_as_absent() {
        let request = json_request(
            "/api/resume/score",
            json!({ "resume_text": "", "job_description": null }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["detailed_scores"]["keywords_score"], 15);

        let request = json_request(
            "/api/resume/suggestions",
            json!({ "resume_text": "Experience", "job_description": null }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_null_resume_text_counts_as_absent() {
        let request = json_request(
            "/api/resume/score",
            json!({ "resume_text": null, "job_description": "rust" }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Resume text is required");

        let request = json_request(
            "/api/resume/keywords",
            json!({ "job_description": "python sql", "resume_text": null }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["match_percentage"], 0.0);
        assert_eq!(body["keyword_density"], 0.0);
    }

    #[tokio::test]
    async fn test_suggestions_endpoint() {
        let request = json_request(
            "/api/resume/suggestions",
            json!({ "resume_text": "Experience\nLed a team of 5 engineers" }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["content_suggestions"].is_array());
        assert!(body["formatting_tips"].is_array());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_keywords_endpoint() {
        let request = json_request(
            "/api/resume/keywords",
            json!({
                "job_description": "python sql machine learning",
                "resume_text": "python developer with sql experience"
            }),
        );
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["match_percentage"], 50.0);
        assert_eq!(body["matching_keywords"], json!(["python", "sql"]));
    }

    #[tokio::test]
    async fn test_keywords_requires_job_description() {
        let request = json_request("/api/resume/keywords", json!({ "resume_text": "python" }));
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Job description is required");
    }

    #[tokio::test]
    async fn test_analyze_requires_file() {
        let response = test_router()
            .oneshot(multipart_request(None, b""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "No resume file provided");
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf() {
        let response = test_router()
            .oneshot(multipart_request(Some("resume.docx"), b"hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Only PDF files are allowed");
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_file() {
        let response = test_router()
            .oneshot(multipart_request(Some("resume.pdf"), b""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "File is empty");
    }

    #[tokio::test]
    async fn test_analyze_unreadable_pdf_is_unprocessable() {
        let response = test_router()
            .oneshot(multipart_request(Some("resume.pdf"), b"not really a pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
