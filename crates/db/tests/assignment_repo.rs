use chrono::NaiveDate;
use sqlx::PgPool;

use snd_core::types::DbId;
use snd_db::models::assignment::{CreateAssignment, STATUS_ACTIVE, TYPE_MANUAL};
use snd_db::models::employee::CreateEmployee;
use snd_db::repositories::{AssignmentRepo, EmployeeRepo};

fn new_assignment(employee_id: DbId, start: NaiveDate) -> CreateAssignment {
    CreateAssignment {
        employee_id,
        project_id: None,
        rental_id: None,
        name: None,
        location: None,
        kind: None,
        status: None,
        notes: None,
        start_date: start,
        end_date: None,
    }
}

async fn seed_employee(pool: &PgPool, file_number: &str) -> DbId {
    EmployeeRepo::create(
        pool,
        &CreateEmployee {
            file_number: file_number.to_string(),
            name: "Test Employee".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_type_and_status_defaults(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-400").await;
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    let created = AssignmentRepo::create(&pool, &new_assignment(employee_id, start))
        .await
        .unwrap();

    assert_eq!(created.kind, TYPE_MANUAL);
    assert_eq!(created.status, STATUS_ACTIVE);
    assert_eq!(created.start_date, start);
    assert_eq!(created.end_date, None);

    let found = AssignmentRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.employee_id, employee_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn explicit_type_and_status_are_kept(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-401").await;
    let mut input = new_assignment(employee_id, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    input.kind = Some("project".to_string());
    input.status = Some("completed".to_string());

    let created = AssignmentRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.kind, "project");
    assert_eq!(created.status, "completed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_returns_every_status_in_id_order(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-402").await;
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    let active = AssignmentRepo::create(&pool, &new_assignment(employee_id, start))
        .await
        .unwrap();
    let mut completed_input = new_assignment(employee_id, start);
    completed_input.status = Some("completed".to_string());
    let completed = AssignmentRepo::create(&pool, &completed_input).await.unwrap();

    // Historical backfill needs completed assignments too, so listing for
    // the generation engine does not filter by status.
    let all = AssignmentRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, active.id);
    assert_eq!(all[1].id, completed.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_employee_filters_rows(pool: PgPool) {
    let first = seed_employee(&pool, "EMP-403").await;
    let second = seed_employee(&pool, "EMP-404").await;
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    AssignmentRepo::create(&pool, &new_assignment(first, start))
        .await
        .unwrap();
    AssignmentRepo::create(&pool, &new_assignment(first, start))
        .await
        .unwrap();
    AssignmentRepo::create(&pool, &new_assignment(second, start))
        .await
        .unwrap();

    let rows = AssignmentRepo::list_by_employee(&pool, first).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|a| a.employee_id == first));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_missing_rows(pool: PgPool) {
    assert!(AssignmentRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}
