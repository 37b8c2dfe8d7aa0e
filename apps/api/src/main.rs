mod compiler;
mod config;
mod errors;
mod latex;
mod models;
mod portable;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::compiler::HttpLatexCompiler;
use crate::config::Config;
use crate::latex::{Credits, TemplateRegistry};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{FsResumeStore, MemoryResumeStore, ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumake API v{}", env!("CARGO_PKG_VERSION"));

    // Compile service client
    let compiler = HttpLatexCompiler::from_config(&config)?;
    info!(
        "Compile service: {} ({})",
        config.latex_api_url, config.latex_compiler
    );

    // Saved-resume store: on disk when DATA_DIR is set, in memory otherwise
    let store: Arc<dyn ResumeStore> = match &config.data_dir {
        Some(dir) => Arc::new(FsResumeStore::open(dir)?),
        None => {
            info!("DATA_DIR not set; saved resumes are kept in memory");
            Arc::new(MemoryResumeStore::new())
        }
    };

    let templates = TemplateRegistry::with_builtin(Credits::from_config(&config));
    info!("{} templates registered", templates.templates().len());

    let state = AppState {
        templates: Arc::new(templates),
        compiler: Arc::new(compiler),
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
