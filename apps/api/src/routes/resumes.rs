//! Axum route handlers for resume documents: samples, import/export, editing
//! and the per-identity saved list.
//!
//! Editing is stateless: each call takes the current resume and returns the
//! edited one with `lastModified` stamped.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::sample::sample_resume;
use crate::models::{Header, NewSavedResume, Resume, SavedResume, Section, SectionKind};
use crate::portable::{export_filename, export_json, import_json, today};
use crate::state::AppState;

/// Identity supplied by the auth layer in front of this service.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    fn require(self) -> Result<String, AppError> {
        self.user_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(AppError::Unauthorized)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeBody {
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
pub struct HeaderEditRequest {
    pub resume: Resume,
    pub header: Header,
}

#[derive(Debug, Deserialize)]
pub struct AddSectionRequest {
    pub resume: Resume,
    pub kind: SectionKind,
}

#[derive(Debug, Deserialize)]
pub struct SectionEditRequest {
    pub resume: Resume,
    pub section: Section,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub resume: Resume,
    pub section_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub resumes: Vec<SavedResume>,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub resume: SavedResume,
}

/// GET /api/v1/resumes/sample
pub async fn handle_sample() -> Json<Resume> {
    Json(sample_resume())
}

/// GET /api/v1/resumes/new
pub async fn handle_new() -> Json<Resume> {
    Json(Resume::new())
}

/// POST /api/v1/resumes/import
///
/// Body is the raw exported document. Validation failures are 400s that name
/// the missing or malformed part.
pub async fn handle_import(body: Bytes) -> Result<Json<Resume>, AppError> {
    Ok(Json(import_json(&body)?))
}

/// POST /api/v1/resumes/export
pub async fn handle_export(Json(resume): Json<Resume>) -> Result<Response, AppError> {
    let json = export_json(&resume).map_err(|e| AppError::Internal(e.into()))?;
    let filename = export_filename(today());
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        json,
    )
        .into_response())
}

/// PUT /api/v1/resumes/header
pub async fn handle_update_header(
    Json(request): Json<HeaderEditRequest>,
) -> Json<Resume> {
    let mut resume = request.resume;
    resume.update_header(request.header);
    Json(resume)
}

/// POST /api/v1/resumes/sections
///
/// Appends a default section of the requested kind after the last one.
pub async fn handle_add_section(Json(request): Json<AddSectionRequest>) -> Json<Resume> {
    let mut resume = request.resume;
    let id = resume.add_section(request.kind);
    debug!("Added section {id} to resume {}", resume.id);
    Json(resume)
}

/// PUT /api/v1/resumes/sections/:id
pub async fn handle_update_section(
    Path(section_id): Path<String>,
    Json(request): Json<SectionEditRequest>,
) -> Result<Json<Resume>, AppError> {
    if request.section.id() != section_id {
        return Err(AppError::Validation(format!(
            "Section id '{}' does not match path id '{section_id}'",
            request.section.id()
        )));
    }
    let name = request.section.section_name().to_string();
    let mut resume = request.resume;
    if !resume.update_section(request.section) {
        return Err(AppError::NotFound(format!("Section {section_id} not found")));
    }
    debug!("Updated section '{name}' of resume {}", resume.id);
    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/sections/:id
pub async fn handle_remove_section(
    Path(section_id): Path<String>,
    Json(request): Json<ResumeBody>,
) -> Result<Json<Resume>, AppError> {
    let mut resume = request.resume;
    if !resume.remove_section(&section_id) {
        return Err(AppError::NotFound(format!("Section {section_id} not found")));
    }
    Ok(Json(resume))
}

/// POST /api/v1/resumes/sections/order
///
/// Body lists section ids in the new display sequence.
pub async fn handle_reorder_sections(Json(request): Json<ReorderRequest>) -> Json<Resume> {
    let ids: Vec<&str> = request.section_ids.iter().map(String::as_str).collect();
    let mut resume = request.resume;
    resume.reorder_sections(&ids);
    Json(resume)
}

/// GET /api/v1/resumes
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedListResponse>, AppError> {
    let user_id = params.require()?;
    let resumes = state.store.list(&user_id).await?;
    Ok(Json(SavedListResponse { resumes }))
}

/// POST /api/v1/resumes
pub async fn handle_save(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(request): Json<NewSavedResume>,
) -> Result<Json<SavedResponse>, AppError> {
    let user_id = params.require()?;
    if request.name.trim().is_empty() || request.template_id.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing required fields: name, templateId, data".to_string(),
        ));
    }
    let resume = state.store.save(&user_id, request).await?;
    Ok(Json(SavedResponse { resume }))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = params.require()?;
    if !state.store.delete(&user_id, id).await? {
        return Err(AppError::NotFound(format!("Saved resume {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
