//! Data directory layout for Folio.
//!
//! The SQLite store and the optional `config.toml` live together in one data
//! directory, `DataBase/` under the directory the site is deployed from.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";

/// Default data directory, relative to the deployment root.
pub const DEFAULT_DATA_DIR: &str = "DataBase";

/// Resolve the data directory from environment or the conventional default.
///
/// Priority:
/// 1. `FOLIO_DATA_DIR` environment variable
/// 2. `./DataBase`
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok())
}

fn data_dir_from(env_value: Option<String>) -> PathBuf {
    match env_value {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_default() {
        assert_eq!(data_dir_from(None), PathBuf::from("DataBase"));
        assert_eq!(data_dir_from(Some("  ".to_string())), PathBuf::from("DataBase"));
    }

    #[test]
    fn test_data_dir_override() {
        assert_eq!(
            data_dir_from(Some("/var/lib/folio".to_string())),
            PathBuf::from("/var/lib/folio")
        );
    }
}
