//! Service configuration -- hard defaults, overlaid by an optional TOML file,
//! overlaid by `REMOVEBG_*` environment variables.

use anyhow::Result;
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Default model repository downloaded into the capability's cache at startup.
pub const DEFAULT_MODEL_URL: &str = "https://huggingface.co/imgly/isnet-general-onnx";

/// Everything externally tunable about the service, resolved once at startup
/// and passed explicitly from `main`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Maximum accepted request body size in bytes; larger bodies are
    /// rejected before any processing
    pub max_body_bytes: usize,

    /// Timeout for fetching a remote image, in seconds
    pub fetch_timeout_secs: u64,

    /// Model repository URL for the inference backend
    pub model_url: String,
}

impl ServiceConfig {
    /// Load configuration, layering an optional config file and the
    /// environment over the defaults.
    pub fn load(file: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000_i64)?
            .set_default("max_body_bytes", 50 * 1024 * 1024_i64)?
            .set_default("fetch_timeout_secs", 10_i64)?
            .set_default("model_url", DEFAULT_MODEL_URL)?;

        if let Some(path) = file {
            builder = builder.add_source(File::with_name(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix("REMOVEBG"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_body_bytes: 50 * 1024 * 1024,
            fetch_timeout_secs: 10,
            model_url: DEFAULT_MODEL_URL.to_string(),
        }
    }
}
