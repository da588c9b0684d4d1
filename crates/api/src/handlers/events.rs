//! Handlers for event creation and the public dashboard.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use carpool_core::error::CoreError;
use carpool_db::models::dashboard::EventDashboard;
use carpool_db::models::event::Event;
use carpool_db::repositories::{DashboardRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::forms::EventForm;
use crate::response::DataResponse;
use crate::state::AppState;

use super::redirect_to_dashboard;

/// POST /
///
/// Create an event and redirect to its freshly minted dashboard.
pub async fn create_event(
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> AppResult<impl IntoResponse> {
    let input = form.validate().map_err(AppError::Validation)?;
    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, slug = %event.slug, "Event created");

    let notice = format!("Event \"{}\" created successfully!", event.name);
    Ok(redirect_to_dashboard(&event.slug, Some(&notice)))
}

/// Query parameters for the dashboard view.
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub notice: Option<String>,
}

/// The dashboard payload: the event, its aggregated projection, and the
/// outcome notice echoed from a preceding mutation, if any.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub event: Event,
    #[serde(flatten)]
    pub dashboard: EventDashboard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// GET /event/{slug}/
///
/// The aggregated public dashboard of an event.
pub async fn view_dashboard(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<DashboardParams>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;
    let dashboard = DashboardRepo::event_dashboard(&state.pool, event.id).await?;

    Ok(Json(DataResponse {
        data: DashboardView {
            event,
            dashboard,
            notice: params.notice,
        },
    }))
}

/// Resolve an event by its public slug, or 404.
pub(crate) async fn resolve_event(pool: &carpool_db::DbPool, slug: &str) -> AppResult<Event> {
    EventRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Event",
                key: slug.to_string(),
            })
        })
}
