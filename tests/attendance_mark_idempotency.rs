use attendanced::attendance::{self, MarkOutcome};
use attendanced::{classes, db, roster};
use chrono::NaiveDate;
use rusqlite::Connection;

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    db::init_schema(&conn).expect("init schema");
    conn
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn attendance_rows(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM attendance", [], |r| r.get(0))
        .expect("count")
}

fn seed_class(conn: &Connection, name: &str, csv: &str) -> String {
    let class_id = classes::create_class(conn, name).expect("create class");
    roster::import_roster(conn, &class_id, csv.as_bytes()).expect("import");
    class_id
}

#[test]
fn marking_twice_same_day_is_idempotent() {
    let conn = test_conn();
    let class_id = seed_class(&conn, "Math101", "unique_number,name\nS1,Alice\n");
    let date = day(2026, 3, 2);

    let first = attendance::mark_present(&conn, &class_id, "S1", date).expect("first mark");
    let second = attendance::mark_present(&conn, &class_id, "S1", date).expect("second mark");

    // Both calls report success identically; exactly one record exists.
    assert_eq!(first, MarkOutcome::Present);
    assert_eq!(second, MarkOutcome::Present);
    assert_eq!(attendance_rows(&conn), 1);
}

#[test]
fn unknown_student_reports_not_found_and_writes_nothing() {
    let conn = test_conn();
    let class_id = seed_class(&conn, "Math101", "unique_number,name\nS1,Alice\n");

    let outcome =
        attendance::mark_present(&conn, &class_id, "NOPE", day(2026, 3, 2)).expect("mark");

    assert_eq!(outcome, MarkOutcome::UnknownStudent);
    assert_eq!(attendance_rows(&conn), 0);
}

#[test]
fn membership_is_checked_per_class() {
    let conn = test_conn();
    let math = seed_class(&conn, "Math101", "unique_number,name\nS1,Alice\n");
    let art = seed_class(&conn, "Art200", "unique_number,name\nS2,Bob\n");

    // S1 belongs to Math101, not Art200.
    let outcome = attendance::mark_present(&conn, &art, "S1", day(2026, 3, 2)).expect("mark");
    assert_eq!(outcome, MarkOutcome::UnknownStudent);

    let outcome = attendance::mark_present(&conn, &math, "S1", day(2026, 3, 2)).expect("mark");
    assert_eq!(outcome, MarkOutcome::Present);
}

#[test]
fn marks_are_scoped_to_their_date() {
    let conn = test_conn();
    let class_id = seed_class(&conn, "Math101", "unique_number,name\nS1,Alice\n");

    attendance::mark_present(&conn, &class_id, "S1", day(2026, 3, 2)).expect("mark");

    let next_day = day(2026, 3, 3);
    assert!(attendance::present_on(&conn, &class_id, next_day)
        .expect("present")
        .is_empty());
    assert_eq!(
        attendance::absent_on(&conn, &class_id, next_day)
            .expect("absent")
            .len(),
        1
    );

    // A second mark on the next day is a new record, not a duplicate.
    attendance::mark_present(&conn, &class_id, "S1", next_day).expect("mark");
    assert_eq!(attendance_rows(&conn), 2);
}
