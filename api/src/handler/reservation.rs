use crate::model::reservation::{
    CancelSlotRequest, GridResponse, MyReservationsResponse, ReservationListQuery,
    ReserveSlotRequest, ReservedSlotResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use garde::Validate;
use kernel::model::id::Username;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// 未登録ユーザーからの予約操作は受け付けない
async fn ensure_registered(registry: &AppRegistry, user: &Username) -> AppResult<()> {
    registry
        .user_repository()
        .find_by_username(user)
        .await?
        .map(|_| ())
        .ok_or(AppError::UnauthenticatedError)
}

pub async fn reserve_slot(
    State(registry): State<AppRegistry>,
    Json(req): Json<ReserveSlotRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;
    ensure_registered(&registry, &req.user).await?;

    let today = Local::now().date_naive();
    registry
        .reservation_service()
        .reserve(req.user, req.space, req.slot, today)
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn cancel_slot(
    State(registry): State<AppRegistry>,
    Json(req): Json<CancelSlotRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;
    ensure_registered(&registry, &req.user).await?;

    let today = Local::now().date_naive();
    registry
        .reservation_service()
        .cancel(req.user, req.space, req.slot, today)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_grid(State(registry): State<AppRegistry>) -> AppResult<Json<GridResponse>> {
    let today = Local::now().date_naive();
    registry
        .reservation_service()
        .grid(today)
        .await
        .map(|grid| Json(GridResponse::new(today, grid)))
}

pub async fn show_user_reservations(
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MyReservationsResponse>> {
    let today = Local::now().date_naive();
    registry
        .reservation_service()
        .my_reservations(&query.user, today)
        .await
        .map(|items| {
            Json(MyReservationsResponse {
                user: query.user,
                items: items.into_iter().map(ReservedSlotResponse::from).collect(),
            })
        })
}
