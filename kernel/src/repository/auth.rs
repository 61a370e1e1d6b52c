use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::auth::AccessToken;
use crate::model::id::UserId;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンに紐づくユーザー ID を取得する
    async fn find_user_id_by_access_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>>;
}
