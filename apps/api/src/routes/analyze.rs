//! Resume analysis endpoint: multipart upload in, match score out.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::matching::engine::ComponentScore;
use crate::state::AppState;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub extracted_text: String,
    pub match_score: f64,
    pub text_length: usize,
    pub components: Vec<ComponentScore>,
}

/// POST /api/v1/analyze
///
/// Multipart form with a `file` part (resume, `.pdf`/`.docx`/`.doc`) and a
/// `job_description` text part. Extraction failure is not an error: the
/// response reports an empty text and a score of 0.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                upload = Some((filename, data.to_vec()));
            }
            "job_description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read field: {e}")))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, data) = upload.ok_or_else(|| AppError::Validation("no file uploaded".into()))?;
    let job_description = job_description
        .filter(|jd| !jd.is_empty())
        .ok_or_else(|| AppError::Validation("job description is required".into()))?;

    let extension = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::UnsupportedFileType(format!(
            "'{filename}' is not supported, allowed: .pdf, .docx, .doc"
        )));
    }

    // Extraction and scoring are CPU-bound; keep them off the async runtime.
    let engine = state.engine.clone();
    let (extracted, score) = tokio::task::spawn_blocking(move || {
        let scratch = persist_upload(&extension, &data)?;
        let extracted = extract_text(scratch.path());
        let score =
            (!extracted.is_empty()).then(|| engine.match_score(&extracted, &job_description));
        // the scratch file is removed when `scratch` drops
        anyhow::Ok((extracted, score))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))??;

    let Some(score) = score else {
        return Ok(Json(AnalyzeResponse {
            success: true,
            message: Some("Could not extract text from file".to_string()),
            extracted_text: String::new(),
            match_score: 0.0,
            text_length: 0,
            components: Vec::new(),
        }));
    };

    Ok(Json(AnalyzeResponse {
        success: true,
        message: None,
        text_length: extracted.len(),
        extracted_text: extracted,
        match_score: score.total,
        components: score.components,
    }))
}

/// Writes the upload into a uniquely named scratch file carrying the
/// original extension, so extraction can dispatch on it. The file is
/// deleted when the returned handle drops.
fn persist_upload(extension: &str, data: &[u8]) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut scratch = tempfile::Builder::new()
        .prefix(&format!("upload-{}-", uuid::Uuid::new_v4()))
        .suffix(&format!(".{extension}"))
        .tempfile()?;
    scratch.write_all(data)?;
    scratch.flush()?;
    Ok(scratch)
}

const SAMPLE_RESUME: &str = "\
John Doe
Software Engineer

Skills: Python, JavaScript, React, Node.js, MongoDB, Machine Learning

Experience:
- Developed web applications using React and Node.js
- Built ML models for data analysis
- Worked with MongoDB databases
";

const SAMPLE_JOB: &str = "\
Looking for a Software Engineer with expertise in Python, React, and MongoDB.
Experience with Machine Learning is a plus.
";

#[derive(Debug, Serialize)]
pub struct SelfTestResponse {
    pub success: bool,
    pub test_score: f64,
    pub message: String,
}

/// GET /api/v1/test
/// Scores a built-in sample pair to verify the engine end to end.
pub async fn handle_self_test(State(state): State<AppState>) -> Json<SelfTestResponse> {
    let score = state.engine.match_score(SAMPLE_RESUME, SAMPLE_JOB);
    let message = if score.total > 0.0 {
        "matcher is working properly".to_string()
    } else {
        "matcher may have issues".to_string()
    };
    Json(SelfTestResponse {
        success: true,
        test_score: score.total,
        message,
    })
}
