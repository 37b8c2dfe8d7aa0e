use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub latex_api_url: String,
    pub latex_compiler: String,
    pub compile_timeout_secs: u64,
    /// Saved resumes persist here when set; otherwise they live in memory.
    pub data_dir: Option<PathBuf>,
    pub credit_project_name: String,
    pub credit_author_name: String,
    pub credit_author_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            latex_api_url: env_or("LATEX_API_URL", "https://latex.ytotech.com/builds/sync"),
            latex_compiler: env_or("LATEX_COMPILER", "pdflatex"),
            compile_timeout_secs: env_or("COMPILE_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("COMPILE_TIMEOUT_SECS must be a whole number of seconds")?,
            data_dir: std::env::var("DATA_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            credit_project_name: env_or("CREDIT_PROJECT_NAME", "Resumake"),
            credit_author_name: env_or("CREDIT_AUTHOR_NAME", "Resumake Contributors"),
            credit_author_url: env_or("CREDIT_AUTHOR_URL", "https://github.com/resumake/resumake"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
