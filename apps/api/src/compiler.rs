/// LaTeX compile client — hands generated source to a remote compile service
/// and returns the rendered PDF bytes.
///
/// Failures are reported, never retried: the caller decides when to try again.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("compile service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("compile service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("compile service returned an empty document")]
    EmptyPayload,
}

/// Anything that can turn LaTeX source into a rendered document.
///
/// Carried in `AppState` as `Arc<dyn LatexCompiler>`.
#[async_trait]
pub trait LatexCompiler: Send + Sync {
    async fn compile(&self, source: &str) -> Result<Bytes, CompileError>;
}

#[derive(Debug, Serialize)]
struct CompileRequest<'a> {
    compiler: &'a str,
    resources: Vec<CompileResource<'a>>,
}

#[derive(Debug, Serialize)]
struct CompileResource<'a> {
    main: bool,
    content: &'a str,
}

/// Client for a latex-on-http style synchronous build endpoint.
#[derive(Clone)]
pub struct HttpLatexCompiler {
    client: Client,
    url: String,
    compiler: String,
}

impl HttpLatexCompiler {
    pub fn new(client: Client, url: String, compiler: String) -> Self {
        Self {
            client,
            url,
            compiler,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, CompileError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.compile_timeout_secs))
            .build()?;
        Ok(Self::new(
            client,
            config.latex_api_url.clone(),
            config.latex_compiler.clone(),
        ))
    }

    fn request_body<'a>(&'a self, source: &'a str) -> CompileRequest<'a> {
        CompileRequest {
            compiler: &self.compiler,
            resources: vec![CompileResource {
                main: true,
                content: source,
            }],
        }
    }
}

#[async_trait]
impl LatexCompiler for HttpLatexCompiler {
    async fn compile(&self, source: &str) -> Result<Bytes, CompileError> {
        debug!(
            "Compiling {} bytes of LaTeX with {} via {}",
            source.len(),
            self.compiler,
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .json(&self.request_body(source))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Compile service returned {}: {}", status, message);
            return Err(CompileError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await?;
        if pdf.is_empty() {
            return Err(CompileError::EmptyPayload);
        }

        debug!("Compile succeeded: {} bytes", pdf.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiler() -> HttpLatexCompiler {
        HttpLatexCompiler::new(
            Client::new(),
            "http://localhost:1/builds/sync".to_string(),
            "pdflatex".to_string(),
        )
    }

    #[test]
    fn test_request_body_shape() {
        let compiler = compiler();
        let body = serde_json::to_value(compiler.request_body("\\documentclass{article}")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "compiler": "pdflatex",
                "resources": [{"main": true, "content": "\\documentclass{article}"}]
            })
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_reported() {
        let err = compiler().compile("x").await.unwrap_err();
        assert!(matches!(err, CompileError::Unreachable(_)));
    }

    #[test]
    fn test_service_error_message_keeps_diagnostics() {
        let err = CompileError::Service {
            status: 400,
            message: "! Undefined control sequence.".to_string(),
        };
        assert!(err.to_string().contains("Undefined control sequence"));
    }
}
