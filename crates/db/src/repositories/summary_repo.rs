//! Read-side aggregation for the stats endpoint.

use sqlx::PgPool;

use crate::models::summary::{Summary, SummaryRow};

/// Computes the dashboard summary on demand. No incremental maintenance or
/// caching; the workload is read-light and a single scan is sufficient.
pub struct SummaryRepo;

impl SummaryRepo {
    /// One scan over `projects` plus a client count.
    pub async fn fetch(pool: &PgPool) -> Result<Summary, sqlx::Error> {
        let query = "\
            SELECT \
                COUNT(*) AS total_projects, \
                (SELECT COUNT(*) FROM clients) AS total_clients, \
                COUNT(*) FILTER (WHERE paid = 'lunas') AS paid_count, \
                COUNT(*) FILTER (WHERE paid = 'belum lunas') AS unpaid_count, \
                COALESCE(SUM(paid_amount) FILTER (WHERE paid = 'lunas'), 0)::BIGINT AS total_income, \
                COUNT(*) FILTER (WHERE status = 'ongoing') AS ongoing_count, \
                COUNT(*) FILTER (WHERE status = 'done') AS done_count, \
                COUNT(*) FILTER (WHERE status = 'canceled') AS canceled_count \
            FROM projects";
        let row = sqlx::query_as::<_, SummaryRow>(query).fetch_one(pool).await?;
        Ok(Summary::from(row))
    }
}
