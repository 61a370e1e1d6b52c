use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use kernel::model::auth::AccessToken;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::AppError;
use uuid::Uuid;

// Bearer トークンをセッションと突き合わせて認証済みユーザーを取り出す
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[axum::async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthenticatedError)?;

        let access_token = AccessToken(
            Uuid::parse_str(bearer.token()).map_err(|_| AppError::UnauthenticatedError)?,
        );

        let user_id = registry
            .auth_repository()
            .find_user_id_by_access_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            user_id,
        })
    }
}
