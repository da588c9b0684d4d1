//! HTTP handlers.
//!
//! Every handler resolves the event by its public slug first; car and
//! member ids are then resolved scoped to that event, so an id that
//! exists under a different event is a plain 404.

pub mod cars;
pub mod events;
pub mod members;
pub mod qr;

use axum::response::Redirect;

use carpool_core::error::CoreError;
use carpool_core::types::DbId;

use crate::error::AppError;

/// Where an event's dashboard lives.
pub(crate) fn dashboard_path(slug: &str) -> String {
    format!("/event/{slug}/")
}

/// Redirect-after-POST to the event dashboard, carrying the outcome
/// message as a `notice` query parameter for the next render.
pub(crate) fn redirect_to_dashboard(slug: &str, notice: Option<&str>) -> Redirect {
    match notice {
        Some(notice) => {
            let query = serde_urlencoded::to_string([("notice", notice)]).unwrap_or_default();
            Redirect::to(&format!("{}?{query}", dashboard_path(slug)))
        }
        None => Redirect::to(&dashboard_path(slug)),
    }
}

/// 404 for an id-scoped lookup miss.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity,
        key: id.to_string(),
    })
}
