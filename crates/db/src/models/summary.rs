//! Aggregate summary payload for the stats endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// Per-status project counts. Statuses absent from the data count 0.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCounts {
    pub ongoing: i64,
    pub done: i64,
    pub canceled: i64,
}

/// Dashboard summary: one scan over the project collection plus a client
/// count. `total_income` sums `paid_amount` over fully paid projects only;
/// partially paid projects contribute nothing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_projects: i64,
    pub total_clients: i64,
    pub paid_count: i64,
    pub unpaid_count: i64,
    pub total_income: i64,
    pub status_counts: StatusCounts,
}

/// Flat row shape for the aggregate query behind [`Summary`].
#[derive(Debug, FromRow)]
pub(crate) struct SummaryRow {
    pub total_projects: i64,
    pub total_clients: i64,
    pub paid_count: i64,
    pub unpaid_count: i64,
    pub total_income: i64,
    pub ongoing_count: i64,
    pub done_count: i64,
    pub canceled_count: i64,
}

impl From<SummaryRow> for Summary {
    fn from(row: SummaryRow) -> Self {
        Summary {
            total_projects: row.total_projects,
            total_clients: row.total_clients,
            paid_count: row.paid_count,
            unpaid_count: row.unpaid_count,
            total_income: row.total_income,
            status_counts: StatusCounts {
                ongoing: row.ongoing_count,
                done: row.done_count,
                canceled: row.canceled_count,
            },
        }
    }
}
