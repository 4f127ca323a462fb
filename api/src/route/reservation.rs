use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    register_reservation, show_arrivals, show_checkins, show_departures, show_inhouse,
    show_reservation, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/arrivals", get(show_arrivals))
        .route("/departures", get(show_departures))
        .route("/checkins", get(show_checkins))
        .route("/inhouse/:status", get(show_inhouse))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", put(update_reservation));

    Router::new().nest("/reservations", reservation_routers)
}
