use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::enrollment::EnrollmentRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::hotel::HotelRepositoryImpl;
use adapter::repository::ticket::TicketRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::hotel::HotelRepository;
use kernel::service::eligibility::EligibilityService;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    eligibility_service: Arc<EligibilityService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let hotel_repository = Arc::new(HotelRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let eligibility_service = Arc::new(EligibilityService::new(
            Arc::new(UserRepositoryImpl::new(pool.clone())),
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone())),
            Arc::new(TicketRepositoryImpl::new(pool.clone())),
        ));
        Self {
            health_check_repository,
            hotel_repository,
            auth_repository,
            eligibility_service,
        }
    }

    // 差し替え可能なコンストラクタ（テストダブル用）
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        eligibility_service: Arc<EligibilityService>,
    ) -> Self {
        Self {
            health_check_repository,
            hotel_repository,
            auth_repository,
            eligibility_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn hotel_repository(&self) -> Arc<dyn HotelRepository> {
        self.hotel_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn eligibility_service(&self) -> Arc<EligibilityService> {
        self.eligibility_service.clone()
    }
}
