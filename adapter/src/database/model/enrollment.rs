use kernel::model::enrollment::Enrollment;
use kernel::model::id::{EnrollmentId, UserId};

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub id: EnrollmentId,
    pub user_id: UserId,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow { id, user_id } = value;
        Enrollment { id, user_id }
    }
}
