use serde::{de::DeserializeOwned, Serialize};
use shared::{
    config::StorageConfig,
    error::{AppError, AppResult},
};
use std::io;
use std::path::{Path, PathBuf};

pub mod model;

// データディレクトリへのハンドル。各リポジトリが JSON ファイルの
// 読み書きに使う。
#[derive(Clone)]
pub struct StorageRoot {
    data_dir: PathBuf,
}

impl StorageRoot {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ファイルが存在しない場合は空のドキュメントとして読む
    pub async fn load_json<T>(&self, file_name: &str) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(AppError::PersistenceError(e)),
        }
    }

    // 一時ファイルに書き切ってから rename で置き換える。
    // 書き込み途中で落ちても既存のファイルは完全な内容のまま残る。
    pub async fn persist_json<T: Serialize>(&self, file_name: &str, value: &T) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let path = self.data_dir.join(file_name);
        let tmp_path = self.data_dir.join(format!("{file_name}.tmp"));
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(AppError::PersistenceError)?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(AppError::PersistenceError)?;
        Ok(())
    }
}

pub fn open_storage_with(cfg: &StorageConfig) -> AppResult<StorageRoot> {
    std::fs::create_dir_all(&cfg.data_dir).map_err(AppError::PersistenceError)?;
    Ok(StorageRoot::new(cfg.data_dir.clone()))
}
