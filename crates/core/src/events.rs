//! Event field constants and validation.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an event name in characters.
pub const MAX_EVENT_NAME_LENGTH: usize = 200;

/// Maximum length of an event location in characters.
pub const MAX_EVENT_LOCATION_LENGTH: usize = 500;

/// Maximum length of a stored slug.
pub const MAX_SLUG_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an event name: required, within the length limit.
pub fn validate_event_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Event name is required".to_string());
    }
    if name.chars().count() > MAX_EVENT_NAME_LENGTH {
        return Err(format!(
            "Event name exceeds maximum length of {MAX_EVENT_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an event location: optional, within the length limit.
pub fn validate_event_location(location: &str) -> Result<(), String> {
    if location.chars().count() > MAX_EVENT_LOCATION_LENGTH {
        return Err(format!(
            "Location exceeds maximum length of {MAX_EVENT_LOCATION_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_required() {
        assert!(validate_event_name("").is_err());
        assert!(validate_event_name("   ").is_err());
        assert!(validate_event_name("Beach Trip").is_ok());
    }

    #[test]
    fn name_length_bounded() {
        assert!(validate_event_name(&"x".repeat(MAX_EVENT_NAME_LENGTH)).is_ok());
        assert!(validate_event_name(&"x".repeat(MAX_EVENT_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn location_optional_but_bounded() {
        assert!(validate_event_location("").is_ok());
        assert!(validate_event_location(&"x".repeat(MAX_EVENT_LOCATION_LENGTH + 1)).is_err());
    }
}
