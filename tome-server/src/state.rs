//! Application state

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tome_core::Catalogue;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// In-memory catalogue, persisted as a JSON array on every write
    pub catalogue: Arc<RwLock<Catalogue>>,

    /// Base path for storage
    pub storage_path: PathBuf,
}

impl AppState {
    /// Create new application state
    pub async fn new() -> Result<Self> {
        // Default to local storage in current directory
        let storage_path =
            std::env::var("TOME_STORAGE_PATH").unwrap_or_else(|_| "./tome_data".to_string());
        let storage_path = PathBuf::from(storage_path);

        tokio::fs::create_dir_all(&storage_path).await?;

        let catalogue_path = storage_path.join("catalogue.json");
        let catalogue = match Self::load_catalogue(&catalogue_path).await {
            Ok(catalogue) => catalogue,
            Err(e) => {
                tracing::warn!("Failed to load catalogue, starting fresh: {}", e);
                Catalogue::default()
            }
        };

        Ok(Self {
            catalogue: Arc::new(RwLock::new(catalogue)),
            storage_path,
        })
    }

    /// Get path to the catalogue file
    pub fn catalogue_path(&self) -> PathBuf {
        self.storage_path.join("catalogue.json")
    }

    async fn load_catalogue(path: &std::path::Path) -> Result<Catalogue> {
        match tokio::fs::read_to_string(path).await {
            Ok(data) => Ok(Catalogue::from_json(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Catalogue::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the catalogue atomically
    /// Writes to a temp file then renames to avoid partial writes
    pub async fn save_catalogue(&self) -> Result<()> {
        let data = {
            let catalogue = self.catalogue.read().await;
            catalogue.to_json()?
        };

        let path = self.catalogue_path();
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data).await?;
        tokio::fs::rename(&temp_path, &path).await?;
        Ok(())
    }
}
