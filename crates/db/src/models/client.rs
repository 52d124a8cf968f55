//! Client entity model and DTOs.

use jobmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clients` table.
///
/// Wire field names are camelCase to match the original dashboard API.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
}

/// DTO for creating a client, standalone or embedded in a project creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    /// Stored as an empty string when absent.
    #[serde(default)]
    pub phone: Option<String>,
}

/// DTO for a partial client update. Only provided fields are applied;
/// anything outside this allow-list is rejected at deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
