//! Handlers for adding and removing cars.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;

use carpool_core::types::DbId;
use carpool_db::repositories::CarRepo;

use crate::error::{AppError, AppResult};
use crate::forms::CarForm;
use crate::state::AppState;

use super::events::resolve_event;
use super::{not_found, redirect_to_dashboard};

/// POST /event/{slug}/add-car/
///
/// Validate and attach a car to the event.
pub async fn add_car(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CarForm>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;
    let input = form.validate().map_err(AppError::Validation)?;

    let car = CarRepo::create(&state.pool, event.id, &input).await?;

    tracing::info!(event_id = event.id, car_id = car.id, "Car added");

    let notice = format!("Car \"{}\" added successfully!", car.label());
    Ok(redirect_to_dashboard(&slug, Some(&notice)))
}

/// POST /event/{slug}/car/{id}/delete/
///
/// Remove a car. Its riders stay in the event, moved to unassigned by
/// the schema's set-null rule.
pub async fn delete_car(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;
    let car = CarRepo::find_in_event(&state.pool, event.id, id)
        .await?
        .ok_or_else(|| not_found("Car", id))?;

    let label = car.label();
    CarRepo::delete_in_event(&state.pool, event.id, id).await?;

    tracing::info!(event_id = event.id, car_id = id, "Car deleted");

    let notice =
        format!("Car \"{label}\" removed from the event. Members were moved to unassigned.");
    Ok(redirect_to_dashboard(&slug, Some(&notice)))
}
