//! Member field constants and validation.
//!
//! Member names are unique per event (exact, case-sensitive match); that
//! invariant lives in the database as `uq_members_event_name` and is
//! surfaced by the repository layer, not checked here.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a member's name in characters.
pub const MAX_MEMBER_NAME_LENGTH: usize = 100;

/// Maximum length of the contact field in characters.
pub const MAX_MEMBER_CONTACT_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a member name: required, within the length limit.
pub fn validate_member_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Member name is required".to_string());
    }
    if name.chars().count() > MAX_MEMBER_NAME_LENGTH {
        return Err(format!(
            "Member name exceeds maximum length of {MAX_MEMBER_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate contact info: optional, within the length limit.
pub fn validate_member_contact(contact: &str) -> Result<(), String> {
    if contact.chars().count() > MAX_MEMBER_CONTACT_LENGTH {
        return Err(format!(
            "Contact exceeds maximum length of {MAX_MEMBER_CONTACT_LENGTH} characters"
        ));
    }
    Ok(())
}
