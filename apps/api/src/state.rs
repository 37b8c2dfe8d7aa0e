use std::sync::Arc;

use crate::compiler::LatexCompiler;
use crate::latex::TemplateRegistry;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Template registry, built once with the configured attribution block.
    pub templates: Arc<TemplateRegistry>,
    /// Remote compile service. Swappable for tests.
    pub compiler: Arc<dyn LatexCompiler>,
    pub store: Arc<dyn ResumeStore>,
}
