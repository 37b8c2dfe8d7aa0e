//! Axum route handlers for LaTeX generation and compilation.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::latex::{TemplateInfo, DEFAULT_TEMPLATE};
use crate::models::Resume;
use crate::portable::{latex_filename, today};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub resume: Resume,
    #[serde(default)]
    pub template_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileSourceRequest {
    #[serde(default)]
    pub latex_code: String,
}

fn pdf_response(pdf: Bytes) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"resume.pdf\""),
        ],
        pdf,
    )
        .into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateInfo>> {
    Json(state.templates.templates().to_vec())
}

/// POST /api/v1/latex
///
/// Returns the generated LaTeX source as a downloadable `.tex` file.
pub async fn handle_latex(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let requested = request.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let template_id = state.templates.resolve(requested);
    let source = state.templates.generate(&request.resume, template_id);
    let filename = latex_filename(template_id, today());

    Ok((
        [
            (header::CONTENT_TYPE, "text/x-tex; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        source,
    )
        .into_response())
}

/// POST /api/v1/compile
///
/// Generates LaTeX for the resume and compiles it to PDF.
/// Empty resumes are rejected before the compile service is contacted.
pub async fn handle_compile(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    if !request.resume.has_content() {
        return Err(AppError::NothingToRender);
    }

    let requested = request.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let source = state.templates.generate(&request.resume, requested);
    info!(
        "Compiling resume {} with template '{}' ({} bytes)",
        request.resume.id,
        state.templates.resolve(requested),
        source.len()
    );

    let pdf = state.compiler.compile(&source).await?;
    Ok(pdf_response(pdf))
}

/// POST /api/v1/compile/source
///
/// Compiles caller-supplied LaTeX as-is.
pub async fn handle_compile_source(
    State(state): State<AppState>,
    Json(request): Json<CompileSourceRequest>,
) -> Result<Response, AppError> {
    if request.latex_code.trim().is_empty() {
        return Err(AppError::Validation("No LaTeX code provided".to_string()));
    }
    let pdf = state.compiler.compile(&request.latex_code).await?;
    Ok(pdf_response(pdf))
}
