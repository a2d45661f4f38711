use std::sync::Arc;

use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::storage::StorageRoot;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::user::UserRepository;
use kernel::service::reservation::ReservationService;
use shared::error::AppResult;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    reservation_service: Arc<ReservationService>,
    user_repository: Arc<dyn UserRepository>,
}

impl AppRegistry {
    // 起動時に各ストアを読み込んで依存を束ねる
    pub async fn new(storage: StorageRoot) -> AppResult<Self> {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(storage.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::load(storage.clone()).await?);
        let user_repository = Arc::new(UserRepositoryImpl::load(storage).await?);
        let reservation_service = Arc::new(ReservationService::new(reservation_repository));
        Ok(Self {
            health_check_repository,
            reservation_service,
            user_repository,
        })
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn reservation_service(&self) -> Arc<ReservationService> {
        self.reservation_service.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
