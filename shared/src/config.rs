use anyhow::Result;
use std::path::PathBuf;

pub struct AppConfig {
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let storage = StorageConfig {
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".into())
                .into(),
        };
        Ok(Self { storage })
    }
}

pub struct StorageConfig {
    pub data_dir: PathBuf,
}
