use sqlx::PgPool;

use snd_core::generation::InsertViolation;
use snd_db::models::employee::CreateEmployee;
use snd_db::repositories::EmployeeRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes_on_fresh_database(pool: PgPool) {
    snd_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn migrations_create_the_expected_tables(pool: PgPool) {
    for table in ["employees", "projects", "rentals", "employee_assignments", "timesheets"] {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(exists, "table {table} missing");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violations_are_classified_by_sqlstate(pool: PgPool) {
    let input = CreateEmployee {
        file_number: "EMP-900".to_string(),
        name: "First".to_string(),
    };
    EmployeeRepo::create(&pool, &input).await.unwrap();

    let err = EmployeeRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(snd_db::violation_kind(&err), InsertViolation::Unique);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_key_violations_are_classified_by_sqlstate(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO employee_assignments (employee_id, start_date) VALUES (424242, '2024-01-01')",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    assert_eq!(snd_db::violation_kind(&err), InsertViolation::ForeignKey);
}
