//! Car field constants, validation, labeling, and seat math.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a driver's name in characters.
pub const MAX_DRIVER_NAME_LENGTH: usize = 100;

/// Maximum length of a car name/label in characters.
pub const MAX_CAR_NAME_LENGTH: usize = 100;

/// Maximum length of the freeform notes field in characters.
pub const MAX_CAR_NOTES_LENGTH: usize = 2000;

/// Minimum declared seat capacity.
pub const MIN_CAR_CAPACITY: i32 = 1;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a driver name: required, within the length limit.
pub fn validate_driver_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Driver name is required".to_string());
    }
    if name.chars().count() > MAX_DRIVER_NAME_LENGTH {
        return Err(format!(
            "Driver name exceeds maximum length of {MAX_DRIVER_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a car name/label: optional, within the length limit.
pub fn validate_car_name(name: &str) -> Result<(), String> {
    if name.chars().count() > MAX_CAR_NAME_LENGTH {
        return Err(format!(
            "Car name exceeds maximum length of {MAX_CAR_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate notes: optional, within the length limit.
pub fn validate_car_notes(notes: &str) -> Result<(), String> {
    if notes.chars().count() > MAX_CAR_NOTES_LENGTH {
        return Err(format!(
            "Notes exceed maximum length of {MAX_CAR_NOTES_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a declared capacity. Capacity is advisory: it bounds nothing at
/// assignment time, but a declared value must be at least [`MIN_CAR_CAPACITY`].
pub fn validate_capacity(capacity: i32) -> Result<(), String> {
    if capacity < MIN_CAR_CAPACITY {
        return Err(format!("Capacity must be at least {MIN_CAR_CAPACITY}"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Display label
// ---------------------------------------------------------------------------

/// Human-readable label for a car: `{driver}'s car`, plus the car name in
/// parentheses when one was given.
///
/// # Examples
///
/// ```
/// use carpool_core::cars::car_label;
///
/// assert_eq!(car_label("Alice", None), "Alice's car");
/// assert_eq!(car_label("Alice", Some("Red Sedan")), "Alice's car (Red Sedan)");
/// ```
pub fn car_label(driver_name: &str, car_name: Option<&str>) -> String {
    match car_name {
        Some(name) if !name.is_empty() => format!("{driver_name}'s car ({name})"),
        _ => format!("{driver_name}'s car"),
    }
}

// ---------------------------------------------------------------------------
// Seat math
// ---------------------------------------------------------------------------

/// Remaining seats: `max(0, capacity - member_count)` when a capacity is
/// declared, `None` (unlimited) otherwise. Overfull cars report zero rather
/// than a negative count.
pub fn available_spots(capacity: Option<i32>, member_count: i64) -> Option<i64> {
    capacity.map(|c| (i64::from(c) - member_count).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_name_required() {
        assert!(validate_driver_name("").is_err());
        assert!(validate_driver_name("Alice").is_ok());
    }

    #[test]
    fn capacity_lower_bound() {
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(-3).is_err());
        assert!(validate_capacity(1).is_ok());
        assert!(validate_capacity(7).is_ok());
    }

    #[test]
    fn label_without_car_name() {
        assert_eq!(car_label("Bob", None), "Bob's car");
        assert_eq!(car_label("Bob", Some("")), "Bob's car");
    }

    #[test]
    fn label_with_car_name() {
        assert_eq!(car_label("Bob", Some("Van")), "Bob's car (Van)");
    }

    #[test]
    fn spots_unlimited_without_capacity() {
        assert_eq!(available_spots(None, 10), None);
    }

    #[test]
    fn spots_subtract_members() {
        assert_eq!(available_spots(Some(4), 1), Some(3));
        assert_eq!(available_spots(Some(4), 4), Some(0));
    }

    #[test]
    fn overfull_car_reports_zero() {
        assert_eq!(available_spots(Some(2), 5), Some(0));
    }
}
