//! Client field validation.

use crate::error::CoreError;

/// Validate the required fields for creating a client.
///
/// Name and email must be non-empty; phone is optional and unconstrained.
pub fn validate_new(name: &str, email: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Client name must not be empty".into()));
    }
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Client email must not be empty".into()));
    }
    Ok(())
}
