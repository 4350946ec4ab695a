use std::path::PathBuf;

use anyhow::{Context, Result};

/// Assets shipped with the crate; independent of the working directory.
const DEFAULT_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Stylesheet served under `/assets`.
pub const STYLESHEET: &str = "portfolio.css";

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed `PORT` aborts startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub assets_dir: PathBuf,
    pub cv_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        let cv_file = lookup("CV_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| assets_dir.join("cv.pdf"));

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            assets_dir,
            cv_file,
        })
    }

    pub fn stylesheet(&self) -> PathBuf {
        self.assets_dir.join(STYLESHEET)
    }
}
