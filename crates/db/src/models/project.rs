//! Project entity model and DTOs.

use chrono::NaiveDate;
use jobmanager_core::project::{PaymentMethod, PaymentState, ProjectStatus};
use jobmanager_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::client::CreateClient;

/// A row from the `projects` table.
///
/// `remaining` is persisted redundantly and recomputed by the repository on
/// every write that can change either amount. `deadline` is date-only and
/// serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    #[sqlx(try_from = "String")]
    pub paid: PaymentState,
    #[sqlx(try_from = "String")]
    pub payment_method: PaymentMethod,
    pub total_bill: i64,
    pub paid_amount: i64,
    pub remaining: i64,
    pub client_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the joint project-plus-client creation flow.
///
/// The embedded `client` is created first and the project references its
/// new id; both inserts share one transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProjectWithClient {
    pub title: String,
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub paid: PaymentState,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub total_bill: i64,
    #[serde(default)]
    pub paid_amount: i64,
    pub client: CreateClient,
}

/// DTO for a partial project update.
///
/// `remaining` is deliberately absent: it is derived state and always
/// recomputed from the effective amounts, regardless of the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub status: Option<ProjectStatus>,
    pub deadline: Option<NaiveDate>,
    pub paid: Option<PaymentState>,
    pub payment_method: Option<PaymentMethod>,
    pub total_bill: Option<i64>,
    pub paid_amount: Option<i64>,
}

/// Client fields embedded in [`ProjectWithClient`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedClient {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A project joined with its client record.
///
/// `client` is `None` when `client_id` dangles (the client was deleted);
/// such projects are surfaced, not omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithClient {
    pub id: DbId,
    pub title: String,
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    pub paid: PaymentState,
    pub payment_method: PaymentMethod,
    pub total_bill: i64,
    pub paid_amount: i64,
    pub remaining: i64,
    pub client: Option<EmbeddedClient>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat row shape for the LEFT JOIN behind [`ProjectWithClient`].
#[derive(Debug, FromRow)]
pub(crate) struct ProjectWithClientRow {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    #[sqlx(try_from = "String")]
    pub paid: PaymentState,
    #[sqlx(try_from = "String")]
    pub payment_method: PaymentMethod,
    pub total_bill: i64,
    pub paid_amount: i64,
    pub remaining: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub client_id: Option<DbId>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
}

impl From<ProjectWithClientRow> for ProjectWithClient {
    fn from(row: ProjectWithClientRow) -> Self {
        let client = match (row.client_id, row.client_name, row.client_email) {
            (Some(id), Some(name), Some(email)) => Some(EmbeddedClient {
                id,
                name,
                email,
                phone: row.client_phone.unwrap_or_default(),
            }),
            _ => None,
        };
        ProjectWithClient {
            id: row.id,
            title: row.title,
            status: row.status,
            deadline: row.deadline,
            paid: row.paid,
            payment_method: row.payment_method,
            total_bill: row.total_bill,
            paid_amount: row.paid_amount,
            remaining: row.remaining,
            client,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
