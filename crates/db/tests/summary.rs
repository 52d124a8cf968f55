//! Integration tests for the summary aggregation.

use jobmanager_core::types::DbId;
use jobmanager_db::repositories::SummaryRepo;
use sqlx::PgPool;

/// Insert a client row directly, returning its id.
async fn add_client(pool: &PgPool, name: &str) -> DbId {
    let (id,): (DbId,) =
        sqlx::query_as("INSERT INTO clients (name, email) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(format!("{name}@x.com"))
            .fetch_one(pool)
            .await
            .unwrap();
    id
}

/// Insert a project row directly with the given status/paid/amount state.
async fn add_project(pool: &PgPool, client_id: DbId, status: &str, paid: &str, paid_amount: i64) {
    sqlx::query(
        "INSERT INTO projects \
            (title, status, deadline, paid, payment_method, \
             total_bill, paid_amount, remaining, client_id) \
         VALUES ('p', $1, '2025-01-01', $2, 'cash', $3, $3, 0, $4)",
    )
    .bind(status)
    .bind(paid)
    .bind(paid_amount)
    .bind(client_id)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_database_yields_all_zeroes(pool: PgPool) {
    let summary = SummaryRepo::fetch(&pool).await.unwrap();

    assert_eq!(summary.total_projects, 0);
    assert_eq!(summary.total_clients, 0);
    assert_eq!(summary.paid_count, 0);
    assert_eq!(summary.unpaid_count, 0);
    assert_eq!(summary.total_income, 0);
    assert_eq!(summary.status_counts.ongoing, 0);
    assert_eq!(summary.status_counts.done, 0);
    assert_eq!(summary.status_counts.canceled, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn income_counts_only_fully_paid_projects(pool: PgPool) {
    let client_id = add_client(&pool, "budi").await;

    add_project(&pool, client_id, "done", "lunas", 1_000_000).await;
    add_project(&pool, client_id, "ongoing", "lunas", 250_000).await;
    // Partially paid but not marked lunas: contributes nothing to income.
    add_project(&pool, client_id, "ongoing", "belum lunas", 500_000).await;
    add_project(&pool, client_id, "canceled", "belum lunas", 0).await;

    let summary = SummaryRepo::fetch(&pool).await.unwrap();

    assert_eq!(summary.total_projects, 4);
    assert_eq!(summary.total_clients, 1);
    assert_eq!(summary.paid_count, 2);
    assert_eq!(summary.unpaid_count, 2);
    assert_eq!(summary.total_income, 1_250_000);
}

#[sqlx::test(migrations = "./migrations")]
async fn status_counts_partition_the_project_set(pool: PgPool) {
    let client_id = add_client(&pool, "sari").await;

    add_project(&pool, client_id, "ongoing", "belum lunas", 0).await;
    add_project(&pool, client_id, "ongoing", "belum lunas", 0).await;
    add_project(&pool, client_id, "done", "lunas", 100).await;
    add_project(&pool, client_id, "canceled", "belum lunas", 0).await;

    let summary = SummaryRepo::fetch(&pool).await.unwrap();

    assert_eq!(summary.status_counts.ongoing, 2);
    assert_eq!(summary.status_counts.done, 1);
    assert_eq!(summary.status_counts.canceled, 1);
    assert_eq!(
        summary.status_counts.ongoing + summary.status_counts.done + summary.status_counts.canceled,
        summary.total_projects
    );
}
