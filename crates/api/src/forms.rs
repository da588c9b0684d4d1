//! Form deserialization and validation for the three input surfaces
//! (create event, add car, add/update member).
//!
//! HTML-form semantics apply: optional fields arrive as empty strings and
//! are normalized to `None` before validation. Each `validate` consumes
//! the raw form and either produces the repository DTO or a [`FieldErrors`]
//! map with one message per invalid field; any error rejects the whole
//! submission before a mutation is attempted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use carpool_core::types::DbId;
use carpool_core::{cars, events, members};
use carpool_db::models::car::CreateCar;
use carpool_db::models::event::CreateEvent;
use carpool_db::models::member::CreateMember;

/// One message per invalid field, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Deserialize an optional form value, treating absent, empty, and
/// whitespace-only strings as `None`. Values are trimmed.
fn empty_string_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    Ok(opt.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
}

// ---------------------------------------------------------------------------
// Create Event
// ---------------------------------------------------------------------------

/// Urlencoded body of the create-event form.
#[derive(Debug, Deserialize)]
pub struct EventForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location: Option<String>,
}

impl EventForm {
    pub fn validate(self) -> Result<CreateEvent, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim().to_string();
        if let Err(msg) = events::validate_event_name(&name) {
            errors.insert("name", msg);
        }
        if let Some(location) = &self.location {
            if let Err(msg) = events::validate_event_location(location) {
                errors.insert("location", msg);
            }
        }
        let date = match &self.date {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert("date", "Date must be in YYYY-MM-DD format".to_string());
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateEvent {
            name,
            date,
            location: self.location,
        })
    }
}

// ---------------------------------------------------------------------------
// Add Car
// ---------------------------------------------------------------------------

/// Urlencoded body of the add-car form.
#[derive(Debug, Deserialize)]
pub struct CarForm {
    #[serde(default)]
    pub driver_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub car_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub capacity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

impl CarForm {
    pub fn validate(self) -> Result<CreateCar, FieldErrors> {
        let mut errors = FieldErrors::new();

        let driver_name = self.driver_name.trim().to_string();
        if let Err(msg) = cars::validate_driver_name(&driver_name) {
            errors.insert("driver_name", msg);
        }
        if let Some(car_name) = &self.car_name {
            if let Err(msg) = cars::validate_car_name(car_name) {
                errors.insert("car_name", msg);
            }
        }
        if let Some(notes) = &self.notes {
            if let Err(msg) = cars::validate_car_notes(notes) {
                errors.insert("notes", msg);
            }
        }
        let capacity = match &self.capacity {
            Some(raw) => match raw.parse::<i32>() {
                Ok(capacity) => {
                    if let Err(msg) = cars::validate_capacity(capacity) {
                        errors.insert("capacity", msg);
                    }
                    Some(capacity)
                }
                Err(_) => {
                    errors.insert("capacity", "Capacity must be a whole number".to_string());
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateCar {
            driver_name,
            car_name: self.car_name,
            capacity,
            notes: self.notes,
        })
    }
}

// ---------------------------------------------------------------------------
// Add / update Member
// ---------------------------------------------------------------------------

/// Urlencoded body of the add-member form.
#[derive(Debug, Deserialize)]
pub struct MemberForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub car: Option<String>,
}

impl MemberForm {
    /// Validate against the set of car ids belonging to the contextual
    /// event. The empty/"unassigned" choice is always valid; a car from
    /// another event is indistinguishable from an unknown id and is a
    /// field error either way.
    pub fn validate(self, event_car_ids: &[DbId]) -> Result<CreateMember, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim().to_string();
        if let Err(msg) = members::validate_member_name(&name) {
            errors.insert("name", msg);
        }
        if let Some(contact) = &self.contact {
            if let Err(msg) = members::validate_member_contact(contact) {
                errors.insert("contact", msg);
            }
        }
        let car_id = parse_car_choice(self.car.as_deref(), event_car_ids, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateMember {
            name,
            contact: self.contact,
            car_id,
        })
    }
}

/// Urlencoded body of the member car-reassignment form.
#[derive(Debug, Deserialize)]
pub struct MemberUpdateForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub car: Option<String>,
}

impl MemberUpdateForm {
    /// Validate the car choice against the contextual event's cars.
    pub fn validate(self, event_car_ids: &[DbId]) -> Result<Option<DbId>, FieldErrors> {
        let mut errors = FieldErrors::new();
        let car_id = parse_car_choice(self.car.as_deref(), event_car_ids, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(car_id)
    }
}

/// Resolve the submitted car choice to an id from the allowed set.
fn parse_car_choice(
    raw: Option<&str>,
    event_car_ids: &[DbId],
    errors: &mut FieldErrors,
) -> Option<DbId> {
    let raw = raw?;
    match raw.parse::<DbId>() {
        Ok(id) if event_car_ids.contains(&id) => Some(id),
        Ok(_) | Err(_) => {
            errors.insert(
                "car",
                "Select a car from this event, or leave unassigned".to_string(),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_form_happy_path() {
        let form: EventForm =
            serde_urlencoded::from_str("name=Beach+Trip&date=2026-08-07&location=Pier+39").unwrap();
        let input = form.validate().unwrap();
        assert_eq!(input.name, "Beach Trip");
        assert_eq!(input.date, Some(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()));
        assert_eq!(input.location.as_deref(), Some("Pier 39"));
    }

    #[test]
    fn event_form_empty_optionals_become_none() {
        let form: EventForm = serde_urlencoded::from_str("name=Trip&date=&location=").unwrap();
        let input = form.validate().unwrap();
        assert!(input.date.is_none());
        assert!(input.location.is_none());
    }

    #[test]
    fn event_form_collects_per_field_errors() {
        let form: EventForm = serde_urlencoded::from_str("name=&date=tomorrow").unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("date"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn car_form_parses_capacity() {
        let form: CarForm =
            serde_urlencoded::from_str("driver_name=Alice&capacity=4").unwrap();
        let input = form.validate().unwrap();
        assert_eq!(input.capacity, Some(4));
    }

    #[test]
    fn car_form_rejects_bad_capacity() {
        let form: CarForm = serde_urlencoded::from_str("driver_name=Alice&capacity=lots").unwrap();
        assert!(form.validate().unwrap_err().contains_key("capacity"));

        let form: CarForm = serde_urlencoded::from_str("driver_name=Alice&capacity=0").unwrap();
        assert!(form.validate().unwrap_err().contains_key("capacity"));
    }

    #[test]
    fn car_form_empty_capacity_means_unlimited() {
        let form: CarForm = serde_urlencoded::from_str("driver_name=Alice&capacity=").unwrap();
        let input = form.validate().unwrap();
        assert!(input.capacity.is_none());
    }

    #[test]
    fn member_form_accepts_cars_of_the_event() {
        let form: MemberForm = serde_urlencoded::from_str("name=Sam&car=7").unwrap();
        let input = form.validate(&[5, 7]).unwrap();
        assert_eq!(input.car_id, Some(7));
    }

    #[test]
    fn member_form_rejects_cars_outside_the_event() {
        let form: MemberForm = serde_urlencoded::from_str("name=Sam&car=9").unwrap();
        let errors = form.validate(&[5, 7]).unwrap_err();
        assert!(errors.contains_key("car"));
    }

    #[test]
    fn member_form_unassigned_choice_always_valid() {
        let form: MemberForm = serde_urlencoded::from_str("name=Sam&car=").unwrap();
        let input = form.validate(&[]).unwrap();
        assert!(input.car_id.is_none());
    }

    #[test]
    fn update_form_validates_choice() {
        let form: MemberUpdateForm = serde_urlencoded::from_str("car=5").unwrap();
        assert_eq!(form.validate(&[5]).unwrap(), Some(5));

        let form: MemberUpdateForm = serde_urlencoded::from_str("car=notanid").unwrap();
        assert!(form.validate(&[5]).is_err());
    }
}
