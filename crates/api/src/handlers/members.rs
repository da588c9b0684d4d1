//! Handlers for adding, reassigning, and removing members.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Form;

use carpool_core::error::CoreError;
use carpool_core::types::DbId;
use carpool_db::is_unique_violation;
use carpool_db::models::car::Car;
use carpool_db::repositories::{CarRepo, MemberRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{MemberForm, MemberUpdateForm};
use crate::state::AppState;

use super::events::resolve_event;
use super::{not_found, redirect_to_dashboard};

/// Label of the car with the given id, if it is in the list.
fn label_of(cars: &[Car], car_id: Option<DbId>) -> Option<String> {
    let car_id = car_id?;
    cars.iter().find(|car| car.id == car_id).map(Car::label)
}

/// POST /event/{slug}/add-member/
///
/// Validate (car choice restricted to this event's cars) and insert. A
/// duplicate name within the event surfaces as a distinct conflict, not
/// a generic validation failure.
pub async fn add_member(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<MemberForm>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;
    let cars = CarRepo::list_by_event(&state.pool, event.id).await?;
    let car_ids: Vec<DbId> = cars.iter().map(|car| car.id).collect();

    let input = form.validate(&car_ids).map_err(AppError::Validation)?;

    let member = match MemberRepo::create(&state.pool, event.id, &input).await {
        Ok(member) => member,
        Err(err) if is_unique_violation(&err, "uq_members_event_name") => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "A member named \"{}\" already exists in this event.",
                input.name
            ))));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(event_id = event.id, member_id = member.id, "Member added");

    let notice = match label_of(&cars, member.car_id) {
        Some(label) => format!("Member \"{}\" added to {label}!", member.name),
        None => format!("Member \"{}\" added as unassigned!", member.name),
    };
    Ok(redirect_to_dashboard(&slug, Some(&notice)))
}

/// POST /event/{slug}/member/{id}/update/
///
/// Reassign (or unassign) a member's car. Only an actual change gets a
/// notice; re-submitting the current assignment redirects silently.
pub async fn update_member(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, DbId)>,
    Form(form): Form<MemberUpdateForm>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;
    let member = MemberRepo::find_in_event(&state.pool, event.id, id)
        .await?
        .ok_or_else(|| not_found("Member", id))?;

    let cars = CarRepo::list_by_event(&state.pool, event.id).await?;
    let car_ids: Vec<DbId> = cars.iter().map(|car| car.id).collect();
    let new_car_id = form.validate(&car_ids).map_err(AppError::Validation)?;

    let previous_car_id = member.car_id;
    let updated = MemberRepo::update_car(&state.pool, event.id, id, new_car_id)
        .await?
        .ok_or_else(|| not_found("Member", id))?;

    let notice = if updated.car_id != previous_car_id {
        tracing::info!(
            event_id = event.id,
            member_id = id,
            car_id = updated.car_id,
            "Member reassigned"
        );
        Some(match label_of(&cars, updated.car_id) {
            Some(label) => format!("\"{}\" moved to {label}!", updated.name),
            None => format!("\"{}\" is now unassigned!", updated.name),
        })
    } else {
        None
    };
    Ok(redirect_to_dashboard(&slug, notice.as_deref()))
}

/// POST /event/{slug}/member/{id}/delete/
///
/// Remove a member from the event.
pub async fn delete_member(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;
    let member = MemberRepo::find_in_event(&state.pool, event.id, id)
        .await?
        .ok_or_else(|| not_found("Member", id))?;

    MemberRepo::delete_in_event(&state.pool, event.id, id).await?;

    tracing::info!(event_id = event.id, member_id = id, "Member deleted");

    let notice = format!("Member \"{}\" removed from the event.", member.name);
    Ok(redirect_to_dashboard(&slug, Some(&notice)))
}
