use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::EnrollmentId;
use kernel::model::ticket::Ticket;
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::ticket::TicketRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
                SELECT
                    t.id,
                    t.enrollment_id,
                    t.status,
                    tt.id AS ticket_type_id,
                    tt.is_remote,
                    tt.includes_hotel
                FROM tickets AS t
                INNER JOIN ticket_types AS tt
                    ON tt.id = t.ticket_type_id
                WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        row.map(Ticket::try_from).transpose()
    }
}
