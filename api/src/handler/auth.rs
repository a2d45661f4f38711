use crate::model::{auth::LoginRequest, user::UserResponse};
use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

// 学籍番号の照合だけを行う。トークン等のセッションは発行しない
pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    req.validate(&())?;

    registry
        .user_repository()
        .verify_credentials(req.into())
        .await
        .map(UserResponse::from)
        .map(Json)
}
