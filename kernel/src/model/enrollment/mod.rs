use crate::model::id::{EnrollmentId, UserId};

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}
