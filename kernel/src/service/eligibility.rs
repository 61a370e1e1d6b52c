use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::id::UserId;
use crate::repository::enrollment::EnrollmentRepository;
use crate::repository::ticket::TicketRepository;
use crate::repository::user::UserRepository;

// ユーザー → 参加登録 → チケットの順に解決し、ホテル情報の閲覧資格を判定する
#[derive(new)]
pub struct EligibilityService {
    user_repository: Arc<dyn UserRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl EligibilityService {
    pub async fn check_hotel_access(&self, user_id: UserId) -> AppResult<()> {
        let Some(_user) = self.user_repository.find_by_id(user_id).await? else {
            return Err(AppError::EntityNotFound("user not found".into()));
        };

        let Some(enrollment) = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
        else {
            return Err(AppError::EntityNotFound("enrollment not found".into()));
        };

        let Some(ticket) = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
        else {
            return Err(AppError::EntityNotFound("ticket not found".into()));
        };

        if !ticket.grants_hotel_access() {
            return Err(AppError::PaymentRequired(
                "ticket does not include hotel accommodation".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::model::enrollment::Enrollment;
    use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
    use crate::model::ticket::{Ticket, TicketStatus, TicketType};
    use crate::model::user::User;

    #[derive(Default)]
    struct MockBackend {
        user: Option<User>,
        enrollment: Option<Enrollment>,
        ticket: Option<Ticket>,
        fail_user_lookup: bool,
    }

    #[async_trait]
    impl UserRepository for MockBackend {
        async fn find_by_id(&self, _user_id: UserId) -> AppResult<Option<User>> {
            if self.fail_user_lookup {
                return Err(AppError::DbQueryError(sqlx::Error::PoolClosed));
            }
            Ok(self.user.clone())
        }
    }

    #[async_trait]
    impl EnrollmentRepository for MockBackend {
        async fn find_by_user_id(&self, _user_id: UserId) -> AppResult<Option<Enrollment>> {
            Ok(self.enrollment.clone())
        }
    }

    #[async_trait]
    impl TicketRepository for MockBackend {
        async fn find_by_enrollment_id(
            &self,
            enrollment_id: EnrollmentId,
        ) -> AppResult<Option<Ticket>> {
            Ok(self
                .ticket
                .clone()
                .filter(|t| t.enrollment_id == enrollment_id))
        }
    }

    fn service(backend: MockBackend) -> EligibilityService {
        let backend = Arc::new(backend);
        EligibilityService::new(backend.clone(), backend.clone(), backend)
    }

    fn user() -> User {
        User {
            id: UserId::new(1),
            email: "attendee@example.com".into(),
        }
    }

    fn enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(10),
            user_id: UserId::new(1),
        }
    }

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: TicketId::new(100),
            enrollment_id: EnrollmentId::new(10),
            status,
            ticket_type: TicketType {
                id: TicketTypeId::new(1000),
                is_remote,
                includes_hotel,
            },
        }
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let res = service(MockBackend::default())
            .check_hotel_access(UserId::new(1))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn missing_enrollment_is_not_found() {
        let backend = MockBackend {
            user: Some(user()),
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn missing_ticket_is_not_found() {
        let backend = MockBackend {
            user: Some(user()),
            enrollment: Some(enrollment()),
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn unpaid_ticket_requires_payment() {
        let backend = MockBackend {
            user: Some(user()),
            enrollment: Some(enrollment()),
            ticket: Some(ticket(TicketStatus::Reserved, false, true)),
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::PaymentRequired(_))));
    }

    #[tokio::test]
    async fn remote_ticket_requires_payment() {
        let backend = MockBackend {
            user: Some(user()),
            enrollment: Some(enrollment()),
            ticket: Some(ticket(TicketStatus::Paid, true, true)),
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::PaymentRequired(_))));
    }

    #[tokio::test]
    async fn ticket_without_hotel_requires_payment() {
        let backend = MockBackend {
            user: Some(user()),
            enrollment: Some(enrollment()),
            ticket: Some(ticket(TicketStatus::Paid, false, false)),
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::PaymentRequired(_))));
    }

    #[tokio::test]
    async fn paid_in_person_ticket_with_hotel_passes() {
        let backend = MockBackend {
            user: Some(user()),
            enrollment: Some(enrollment()),
            ticket: Some(ticket(TicketStatus::Paid, false, true)),
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let backend = MockBackend {
            fail_user_lookup: true,
            ..Default::default()
        };
        let res = service(backend).check_hotel_access(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::DbQueryError(_))));
    }
}
