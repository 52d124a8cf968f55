use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The payment guard rejected a write: a project may not be marked
    /// paid or done while a positive balance remains.
    #[error("Payment incomplete: {0}")]
    PaymentIncomplete(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
