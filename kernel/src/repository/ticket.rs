use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::EnrollmentId;
use crate::model::ticket::Ticket;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    // 参加登録 ID に紐づくチケットをチケット種別込みで取得する
    async fn find_by_enrollment_id(&self, enrollment_id: EnrollmentId)
        -> AppResult<Option<Ticket>>;
}
