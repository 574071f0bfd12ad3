use thiserror::Error;

/// Errors produced by the model-catalog types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelsError {
    /// A field violated its construction-time constraint
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No model with the requested id exists in the listing
    #[error("model not found: {0}")]
    NotFound(String),
}

/// Reject blank (empty or whitespace-only) required string fields.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<(), ModelsError> {
    if value.trim().is_empty() {
        return Err(ModelsError::InvalidArgument(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}
