pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cars, events, members, qr};
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// POST /                                  -> create_event
/// GET  /event/{slug}/                     -> view_dashboard
/// GET  /event/{slug}/qr/                  -> event_qr
/// POST /event/{slug}/add-car/             -> add_car
/// POST /event/{slug}/add-member/          -> add_member
/// POST /event/{slug}/member/{id}/update/  -> update_member
/// POST /event/{slug}/member/{id}/delete/  -> delete_member
/// POST /event/{slug}/car/{id}/delete/     -> delete_car
/// ```
///
/// Mutating paths register POST only; any other method answers 405.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(events::create_event))
        .route("/event/{slug}/", get(events::view_dashboard))
        .route("/event/{slug}/qr/", get(qr::event_qr))
        .route("/event/{slug}/add-car/", post(cars::add_car))
        .route("/event/{slug}/add-member/", post(members::add_member))
        .route(
            "/event/{slug}/member/{id}/update/",
            post(members::update_member),
        )
        .route(
            "/event/{slug}/member/{id}/delete/",
            post(members::delete_member),
        )
        .route("/event/{slug}/car/{id}/delete/", post(cars::delete_car))
}
