//! Integration tests for project creation and update semantics:
//! joint creation atomicity, partial updates, and the persisted
//! `remaining` field staying in sync with the amounts.

use chrono::NaiveDate;
use jobmanager_core::project::{PaymentMethod, PaymentState, ProjectStatus};
use jobmanager_db::models::client::CreateClient;
use jobmanager_db::models::project::{CreateProjectWithClient, UpdateProject};
use jobmanager_db::repositories::ProjectRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn new_project(title: &str, total_bill: i64, paid_amount: i64) -> CreateProjectWithClient {
    CreateProjectWithClient {
        title: title.to_string(),
        status: ProjectStatus::Ongoing,
        deadline: deadline(),
        paid: PaymentState::Unpaid,
        payment_method: PaymentMethod::Cash,
        total_bill,
        paid_amount,
        client: CreateClient {
            name: "Budi".to_string(),
            email: "budi@x.com".to_string(),
            phone: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn joint_creation_persists_both_rows(pool: PgPool) {
    let (project, client) = ProjectRepo::create_with_client(&pool, &new_project("Logo", 1_000_000, 250_000))
        .await
        .unwrap();

    assert_eq!(project.client_id, client.id);
    assert_eq!(project.remaining, 750_000);
    assert_eq!(client.phone, "");

    let found = ProjectRepo::find_by_id(&pool, project.id).await.unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let (first, _) = ProjectRepo::create_with_client(&pool, &new_project("First", 0, 0))
        .await
        .unwrap();
    let (second, _) = ProjectRepo::create_with_client(&pool, &new_project("Second", 0, 0))
        .await
        .unwrap();

    let all = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_recomputes_remaining_from_effective_values(pool: PgPool) {
    let (project, _) = ProjectRepo::create_with_client(&pool, &new_project("Logo", 1_000_000, 0))
        .await
        .unwrap();
    assert_eq!(project.remaining, 1_000_000);

    // Touch only paid_amount: remaining must use the stored total_bill.
    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            paid_amount: Some(400_000),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.total_bill, 1_000_000);
    assert_eq!(updated.paid_amount, 400_000);
    assert_eq!(updated.remaining, 600_000);

    // Touch only total_bill: remaining must use the stored paid_amount.
    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            total_bill: Some(500_000),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.remaining, 100_000);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let (project, _) = ProjectRepo::create_with_client(&pool, &new_project("Logo", 100, 100))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            status: Some(ProjectStatus::Done),
            paid: Some(PaymentState::Paid),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status, ProjectStatus::Done);
    assert_eq!(updated.paid, PaymentState::Paid);
    // Untouched fields survive.
    assert_eq!(updated.title, "Logo");
    assert_eq!(updated.payment_method, PaymentMethod::Cash);
    assert_eq!(updated.total_bill, 100);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_project_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 9999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}
