//! Note entity model and DTOs.

use jobmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
///
/// `project_id` is a weak reference; it may point at a deleted project.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO shared by note creation and update.
///
/// Updates replace all fields wholesale (the original API sends the full
/// note body on every save), so there is no partial variant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub project_id: Option<DbId>,
}
