//! Site configuration loader for Folio.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`SiteConfig`]. Falls back to defaults when the file is missing or
//! malformed, so a bare checkout serves without any configuration.

use std::path::Path;

use folio_types::config::SiteConfig;

/// Load site configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`SiteConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_site_config(data_dir: &Path) -> SiteConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return SiteConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return SiteConfig::default();
        }
    };

    match toml::from_str::<SiteConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            SiteConfig::default()
        }
    }
}
