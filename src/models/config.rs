//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Cookie/JWT signing secret. Must be at least 64 bytes.
    #[serde(default = "default_secret")]
    pub secret: String,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "rentahouse.db".to_string()
}

fn default_templates_dir() -> String {
    "templates/**/*.html".to_string()
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_upload_dir() -> String {
    "./upload".to_string()
}

fn default_secret() -> String {
    // Development fallback only; override via config.yaml or the SECRET
    // environment variable.
    "insecure-development-secret-0123456789-0123456789-0123456789-0123456789".to_string()
}
