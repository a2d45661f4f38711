use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{cancel_slot, reserve_slot, show_grid, show_user_reservations};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/reserve", post(reserve_slot))
        .route("/cancel", post(cancel_slot))
        .route("/grid", get(show_grid))
        .route("/reservations", get(show_user_reservations))
}
