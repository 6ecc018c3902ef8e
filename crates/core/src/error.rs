#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error keyed by a numeric id.
    pub fn not_found_id(entity: &'static str, id: crate::types::DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: id.to_string(),
        }
    }

    /// Not-found error keyed by a URL slug.
    pub fn not_found_slug(entity: &'static str, slug: &str) -> Self {
        CoreError::NotFound {
            entity,
            key: slug.to_string(),
        }
    }
}
