use async_trait::async_trait;
use derive_new::new;
use kernel::model::auth::AccessToken;
use kernel::model::id::UserId;
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::auth::SessionRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn find_user_id_by_access_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
                SELECT
                    user_id
                FROM sessions
                WHERE token = $1
            "#,
        )
        .bind(access_token.0)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(|r| r.user_id))
    }
}
