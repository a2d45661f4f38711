use crate::storage::StorageRoot;
use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    storage: StorageRoot,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    // データディレクトリに到達できるかだけを確認する
    async fn check_storage(&self) -> bool {
        tokio::fs::metadata(self.storage.data_dir()).await.is_ok()
    }
}
