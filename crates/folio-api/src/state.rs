//! Application state shared by every request.
//!
//! Holds the store pool (each request takes its own scope from it) and the
//! resolved site configuration.

use std::path::PathBuf;
use std::sync::Arc;

use folio_infra::sqlite::pool::{DatabasePool, database_url};
use folio_types::config::SiteConfig;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DatabasePool,
    pub config: Arc<SiteConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: create the data directory, open the
    /// store, and create its tables.
    ///
    /// Any failure here is fatal to startup.
    pub async fn init(data_dir: PathBuf, config: SiteConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = database_url(&data_dir, &config.database_file);
        let db_pool = DatabasePool::new(&db_url).await?;
        info!(data_dir = %data_dir.display(), "Store initialized");

        Ok(Self {
            db_pool,
            config: Arc::new(config),
            data_dir,
        })
    }

    /// Directory holding `index.html` and `static/`.
    pub fn web_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.web_dir)
    }
}
