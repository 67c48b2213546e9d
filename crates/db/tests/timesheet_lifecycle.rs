use chrono::NaiveDate;
use sqlx::PgPool;

use snd_core::generation::{InsertViolation, GENERATED_STATUS};
use snd_core::types::DbId;
use snd_core::workday::{day_hours, shift_end, shift_start};
use snd_db::models::employee::CreateEmployee;
use snd_db::models::timesheet::{NewGeneratedTimesheet, TimesheetListQuery};
use snd_db::repositories::{EmployeeRepo, TimesheetRepo};

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

fn generated_row(employee_id: DbId, date: NaiveDate) -> NewGeneratedTimesheet {
    let (hours_worked, overtime_hours) = day_hours(date);
    NewGeneratedTimesheet {
        employee_id,
        assignment_id: 0,
        project_id: None,
        rental_id: None,
        date,
        start_time: shift_start(date),
        end_time: shift_end(date),
        hours_worked,
        overtime_hours,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_marks_the_day_as_existing(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-300").await;
    let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    assert!(!TimesheetRepo::exists_for_day(&pool, employee_id, date)
        .await
        .unwrap());

    let mut row = generated_row(employee_id, date);
    row.assignment_id = seed_assignment(&pool, employee_id).await;
    let created = TimesheetRepo::insert_generated(&pool, &row).await.unwrap();
    assert_eq!(created.status, GENERATED_STATUS);
    assert_eq!(created.hours_worked, 8.0);
    assert_eq!(created.start_time, shift_start(date));

    assert!(TimesheetRepo::exists_for_day(&pool, employee_id, date)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_day_hits_the_partial_unique_index(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-301").await;
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let mut row = generated_row(employee_id, date);
    row.assignment_id = seed_assignment(&pool, employee_id).await;

    TimesheetRepo::insert_generated(&pool, &row).await.unwrap();
    let err = TimesheetRepo::insert_generated(&pool, &row)
        .await
        .unwrap_err();
    assert_eq!(snd_db::violation_kind(&err), InsertViolation::Unique);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_delete_frees_the_day(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-302").await;
    let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
    let mut row = generated_row(employee_id, date);
    row.assignment_id = seed_assignment(&pool, employee_id).await;

    let created = TimesheetRepo::insert_generated(&pool, &row).await.unwrap();
    assert!(TimesheetRepo::soft_delete(&pool, created.id).await.unwrap());

    // The day is generatable again and the row is hidden from reads.
    assert!(!TimesheetRepo::exists_for_day(&pool, employee_id, date)
        .await
        .unwrap());
    assert!(TimesheetRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());

    // A fresh insert for the same day is accepted by the partial index.
    TimesheetRepo::insert_generated(&pool, &row).await.unwrap();

    // Deleting twice is a no-op.
    assert!(!TimesheetRepo::soft_delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_employee_and_date_range(pool: PgPool) {
    let first = seed_employee(&pool, "EMP-303").await;
    let second = seed_employee(&pool, "EMP-304").await;
    let first_assignment = seed_assignment(&pool, first).await;
    let second_assignment = seed_assignment(&pool, second).await;

    for day in 1..=5 {
        let date = NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
        let mut row = generated_row(first, date);
        row.assignment_id = first_assignment;
        TimesheetRepo::insert_generated(&pool, &row).await.unwrap();
    }
    let mut other = generated_row(second, NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
    other.assignment_id = second_assignment;
    TimesheetRepo::insert_generated(&pool, &other).await.unwrap();

    let rows = TimesheetRepo::list(
        &pool,
        &TimesheetListQuery {
            employee_id: Some(first),
            from: Some(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2024, 4, 4).unwrap()),
            limit: None,
            offset: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 3);
    // Newest date first.
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 4, 4).unwrap());
    assert!(rows.iter().all(|t| t.employee_id == first));

    assert_eq!(TimesheetRepo::count_for_employee(&pool, first).await.unwrap(), 5);
    assert_eq!(TimesheetRepo::count_for_employee(&pool, second).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_respects_limit_and_offset(pool: PgPool) {
    let employee_id = seed_employee(&pool, "EMP-305").await;
    let assignment_id = seed_assignment(&pool, employee_id).await;

    for day in 1..=4 {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        let mut row = generated_row(employee_id, date);
        row.assignment_id = assignment_id;
        TimesheetRepo::insert_generated(&pool, &row).await.unwrap();
    }

    let rows = TimesheetRepo::list(
        &pool,
        &TimesheetListQuery {
            employee_id: Some(employee_id),
            from: None,
            to: None,
            limit: Some(2),
            offset: Some(1),
        },
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
}

async fn seed_assignment(pool: &PgPool, employee_id: DbId) -> DbId {
    sqlx::query_scalar::<_, DbId>(
        "INSERT INTO employee_assignments (employee_id, start_date)
         VALUES ($1, '2024-01-01') RETURNING id",
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
