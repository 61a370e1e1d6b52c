use kernel::model::id::UserId;
use kernel::model::user::User;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow { id, email } = value;
        User { id, email }
    }
}
