use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("1日に予約できるのは{0}時間までです。")]
    QuotaExceededError(usize),
    #[error("指定の時間帯はすでに予約されています。")]
    AlreadyBookedError,
    #[error("他のユーザーの予約はキャンセルできません。")]
    NotOwnerError,
    #[error("指定の時間帯に予約はありません。")]
    ReservationNotFoundError,
    #[error("このユーザー名はすでに使われています。")]
    DuplicateUsernameError,
    #[error("ログインに失敗しました。")]
    UnauthenticatedError,
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("予約データの書き込みに失敗しました。")]
    PersistenceError(#[source] std::io::Error),
    #[error("予約データの変換に失敗しました。")]
    SerializationError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::ValidationError(_) | AppError::ConversionEntityError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::NotOwnerError => StatusCode::FORBIDDEN,
            AppError::ReservationNotFoundError => StatusCode::NOT_FOUND,
            AppError::AlreadyBookedError | AppError::DuplicateUsernameError => StatusCode::CONFLICT,
            AppError::QuotaExceededError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PersistenceError(_) | AppError::SerializationError(_) => {
                tracing::error!(
                    error.cause_chain = ?self,
                    error.message = %self,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}
