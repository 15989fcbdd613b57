//! Integration tests for the attendance aggregation queries.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use staffhub_core::attendance::AttendanceStatus;
use staffhub_db::models::attendance::CreateAttendance;
use staffhub_db::models::department::CreateDepartment;
use staffhub_db::models::employee::CreateEmployee;
use staffhub_db::repositories::{AttendanceRepo, DepartmentRepo, EmployeeRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_employee(pool: &PgPool, code: &str, last_name: &str, is_active: bool) -> i64 {
    let dept = match DepartmentRepo::list(pool, None).await.unwrap().first() {
        Some(d) => d.id,
        None => {
            DepartmentRepo::insert(
                pool,
                &CreateDepartment {
                    name: "Engineering".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap()
            .id
        }
    };

    EmployeeRepo::insert(
        pool,
        &CreateEmployee {
            employee_id: code.to_string(),
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            email: format!("{code}@example.com"),
            phone_number: "+1234567890".to_string(),
            address: "1 Test Way".to_string(),
            department_id: dept,
            date_joined: date(2024, 1, 1),
            position: String::new(),
            salary: None,
            is_active,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_record(pool: &PgPool, employee_id: i64, day: NaiveDate, status: AttendanceStatus) {
    AttendanceRepo::insert(
        pool,
        &CreateAttendance {
            employee_id,
            date: day,
            status,
            check_in_time: match status {
                AttendanceStatus::Absent => None,
                _ => NaiveTime::from_hms_opt(9, 0, 0),
            },
            check_out_time: None,
            notes: String::new(),
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Per-employee counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn status_counts_five_weekdays(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP100", "Alpha", true).await;

    // 3 present, 1 absent, 1 late across 2025-01-01..2025-01-05.
    seed_record(&pool, employee, date(2025, 1, 1), AttendanceStatus::Present).await;
    seed_record(&pool, employee, date(2025, 1, 2), AttendanceStatus::Present).await;
    seed_record(&pool, employee, date(2025, 1, 3), AttendanceStatus::Absent).await;
    seed_record(&pool, employee, date(2025, 1, 4), AttendanceStatus::Late).await;
    seed_record(&pool, employee, date(2025, 1, 5), AttendanceStatus::Present).await;

    let counts = AttendanceRepo::status_counts(&pool, employee, date(2025, 1, 1), date(2025, 1, 5))
        .await
        .unwrap();

    assert_eq!(counts.total_days, 5);
    assert_eq!(counts.present_days, 3);
    assert_eq!(counts.absent_days, 1);
    assert_eq!(counts.late_days, 1);
    assert_eq!(counts.half_days, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn status_counts_range_is_inclusive_both_ends(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP101", "Beta", true).await;

    seed_record(&pool, employee, date(2025, 1, 1), AttendanceStatus::Present).await;
    seed_record(&pool, employee, date(2025, 1, 5), AttendanceStatus::Present).await;
    // Outside the range on both sides.
    seed_record(&pool, employee, date(2024, 12, 31), AttendanceStatus::Present).await;
    seed_record(&pool, employee, date(2025, 1, 6), AttendanceStatus::Present).await;

    let counts = AttendanceRepo::status_counts(&pool, employee, date(2025, 1, 1), date(2025, 1, 5))
        .await
        .unwrap();
    assert_eq!(counts.total_days, 2, "both range endpoints must count");
}

#[sqlx::test(migrations = "./migrations")]
async fn status_counts_no_records_is_all_zero(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP102", "Gamma", true).await;

    let counts = AttendanceRepo::status_counts(&pool, employee, date(2025, 1, 1), date(2025, 1, 31))
        .await
        .unwrap();
    assert_eq!(counts.total_days, 0);
    assert_eq!(counts.present_days, 0);
}

// ---------------------------------------------------------------------------
// Fleet-wide counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn fleet_counts_include_employees_with_no_records(pool: PgPool) {
    let with_records = seed_employee(&pool, "EMP110", "Delta", true).await;
    seed_employee(&pool, "EMP111", "Echo", true).await;

    seed_record(&pool, with_records, date(2025, 2, 3), AttendanceStatus::Present).await;

    let rows = AttendanceRepo::fleet_status_counts(&pool, date(2025, 2, 1), date(2025, 2, 28))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2, "zero-record employee must still appear");

    let delta = rows.iter().find(|r| r.employee_code == "EMP110").unwrap();
    assert_eq!(delta.total_days, 1);
    assert_eq!(delta.present_days, 1);

    let echo = rows.iter().find(|r| r.employee_code == "EMP111").unwrap();
    assert_eq!(echo.total_days, 0);
    assert_eq!(echo.present_days, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn fleet_counts_exclude_inactive_employees(pool: PgPool) {
    seed_employee(&pool, "EMP120", "Foxtrot", true).await;
    let inactive = seed_employee(&pool, "EMP121", "Golf", false).await;
    seed_record(&pool, inactive, date(2025, 2, 3), AttendanceStatus::Present).await;

    let rows = AttendanceRepo::fleet_status_counts(&pool, date(2025, 2, 1), date(2025, 2, 28))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_code, "EMP120");
}

#[sqlx::test(migrations = "./migrations")]
async fn fleet_counts_with_no_active_employees_is_empty(pool: PgPool) {
    let rows = AttendanceRepo::fleet_status_counts(&pool, date(2025, 2, 1), date(2025, 2, 28))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// Distribution queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn distribution_and_daily_counts(pool: PgPool) {
    let a = seed_employee(&pool, "EMP130", "Hotel", true).await;
    let b = seed_employee(&pool, "EMP131", "India", true).await;

    seed_record(&pool, a, date(2025, 3, 3), AttendanceStatus::Present).await;
    seed_record(&pool, b, date(2025, 3, 3), AttendanceStatus::Present).await;
    seed_record(&pool, a, date(2025, 3, 4), AttendanceStatus::Late).await;
    seed_record(&pool, b, date(2025, 3, 4), AttendanceStatus::Absent).await;

    let total = AttendanceRepo::count_in_range(&pool, date(2025, 3, 1), date(2025, 3, 31))
        .await
        .unwrap();
    assert_eq!(total, 4);

    let distribution =
        AttendanceRepo::status_distribution(&pool, date(2025, 3, 1), date(2025, 3, 31))
            .await
            .unwrap();
    let get = |status: &str| {
        distribution
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    };
    assert_eq!(get("present"), 2);
    assert_eq!(get("late"), 1);
    assert_eq!(get("absent"), 1);
    assert_eq!(get("half_day"), 0);

    // Daily counts only track present records.
    let daily = AttendanceRepo::daily_present_counts(&pool, date(2025, 3, 1), date(2025, 3, 31))
        .await
        .unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].date, date(2025, 3, 3));
    assert_eq!(daily[0].count, 2);
}
