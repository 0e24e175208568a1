//! Site configuration types for Folio.
//!
//! `SiteConfig` represents the optional `config.toml` in the data directory
//! that controls where the site listens and where its files live.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the portfolio site.
///
/// Loaded from `{data_dir}/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// File name of the SQLite store inside the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Directory holding `index.html` and the `static/` assets.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_file() -> String {
    "appdata.db".to_string()
}

fn default_web_dir() -> String {
    "web".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_file: default_database_file(),
            web_dir: default_web_dir(),
        }
    }
}

impl SiteConfig {
    /// `host:port` string for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
