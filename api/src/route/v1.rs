use super::{
    auth::build_auth_routers, health::build_health_check_routers,
    reservation::build_reservation_routers, room::build_room_routers, user::build_user_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_room_routers())
        .merge(build_reservation_routers());
    Router::new().nest("/api/v1", router)
}
