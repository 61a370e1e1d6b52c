use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    PaymentRequired(String),
    #[error("認証情報がありません。")]
    UnauthenticatedError,
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("データベース処理実行中にエラーが発生しました。")]
    DbQueryError(#[source] sqlx::Error),
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ConversionEntityError(_)
            | AppError::DbQueryError(_)
            | AppError::UnknownError(_) => StatusCode::BAD_REQUEST,
        };

        match status_code {
            StatusCode::NOT_FOUND | StatusCode::PAYMENT_REQUIRED | StatusCode::UNAUTHORIZED => {
                tracing::warn!("{}", self)
            }
            _ => tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            ),
        }

        status_code.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (
                AppError::EntityNotFound("x".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::PaymentRequired("x".into()),
                StatusCode::PAYMENT_REQUIRED,
            ),
            (AppError::UnauthenticatedError, StatusCode::UNAUTHORIZED),
            (
                AppError::ConversionEntityError("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::DbQueryError(sqlx::Error::RowNotFound),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::UnknownError(anyhow::anyhow!("x")),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
