pub mod health;
pub mod render;
pub mod resumes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/latex", post(render::handle_latex))
        .route("/api/v1/compile", post(render::handle_compile))
        .route(
            "/api/v1/compile/source",
            post(render::handle_compile_source),
        )
        // Resume documents
        .route("/api/v1/resumes/sample", get(resumes::handle_sample))
        .route("/api/v1/resumes/new", get(resumes::handle_new))
        .route("/api/v1/resumes/import", post(resumes::handle_import))
        .route("/api/v1/resumes/export", post(resumes::handle_export))
        // Editing
        .route("/api/v1/resumes/header", put(resumes::handle_update_header))
        .route("/api/v1/resumes/sections", post(resumes::handle_add_section))
        .route(
            "/api/v1/resumes/sections/order",
            post(resumes::handle_reorder_sections),
        )
        .route(
            "/api/v1/resumes/sections/:id",
            put(resumes::handle_update_section).delete(resumes::handle_remove_section),
        )
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_saved).post(resumes::handle_save),
        )
        .route("/api/v1/resumes/:id", delete(resumes::handle_delete_saved))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
