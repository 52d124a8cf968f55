//! Note field validation.
//!
//! Notes may reference a project by id, but the reference is lookup-only:
//! deleting the project leaves the note (and its now-dangling reference)
//! untouched.

use crate::error::CoreError;

/// Validate the required fields for creating or updating a note.
pub fn validate_content(title: &str, content: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Note title must not be empty".into()));
    }
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Note content must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn requires_title_and_content() {
        assert_matches!(validate_content("", "body"), Err(CoreError::Validation(_)));
        assert_matches!(validate_content("title", ""), Err(CoreError::Validation(_)));
        validate_content("title", "body").unwrap();
    }
}
