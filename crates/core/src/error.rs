#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Entity lookup miss. `key` is the public identifier used for the
    /// lookup (a slug or a numeric id rendered as text).
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
