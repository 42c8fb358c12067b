use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use uuid::Uuid;

/// Result of a marking attempt. An unknown student is a normal outcome
/// the caller reports back, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Present,
    UnknownStudent,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub unique_number: String,
    pub name: String,
}

/// Wire and storage form of a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Marks a student present for the given date, idempotently.
///
/// The student must already be on the class roster; attendance rows are
/// keyed by unique_number, so the membership check here is the only thing
/// standing between the attendance table and numbers no student has.
/// Re-marking the same (unique_number, class, date) is a no-op and still
/// reports `Present`.
pub fn mark_present(
    conn: &Connection,
    class_id: &str,
    unique_number: &str,
    date: NaiveDate,
) -> anyhow::Result<MarkOutcome> {
    let enrolled: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM students WHERE unique_number = ? AND class_id = ?",
            (unique_number, class_id),
            |r| r.get(0),
        )
        .optional()?;
    if enrolled.is_none() {
        return Ok(MarkOutcome::UnknownStudent);
    }

    // Single guarded statement; the attendance table itself carries no
    // uniqueness constraint on the triple.
    conn.execute(
        "INSERT INTO attendance(id, unique_number, class_id, date)
         SELECT ?1, ?2, ?3, ?4
         WHERE NOT EXISTS (
             SELECT 1 FROM attendance
             WHERE unique_number = ?2 AND class_id = ?3 AND date = ?4
         )",
        (
            Uuid::new_v4().to_string(),
            unique_number,
            class_id,
            date_key(date),
        ),
    )?;

    Ok(MarkOutcome::Present)
}

/// Students of the class with an attendance row for the date. The join is
/// on unique_number, not on the student's internal id.
pub fn present_on(
    conn: &Connection,
    class_id: &str,
    date: NaiveDate,
) -> anyhow::Result<Vec<RosterEntry>> {
    let mut stmt = conn.prepare(
        "SELECT students.unique_number, students.name FROM attendance
         JOIN students ON attendance.unique_number = students.unique_number
         WHERE attendance.class_id = ? AND attendance.date = ?",
    )?;
    let rows = stmt
        .query_map((class_id, date_key(date)), |r| {
            Ok(RosterEntry {
                unique_number: r.get(0)?,
                name: r.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Roster minus the present set, computed by exclusion in SQL.
pub fn absent_on(
    conn: &Connection,
    class_id: &str,
    date: NaiveDate,
) -> anyhow::Result<Vec<RosterEntry>> {
    let mut stmt = conn.prepare(
        "SELECT unique_number, name FROM students
         WHERE class_id = ?1 AND unique_number NOT IN (
             SELECT unique_number FROM attendance WHERE class_id = ?1 AND date = ?2
         )",
    )?;
    let rows = stmt
        .query_map((class_id, date_key(date)), |r| {
            Ok(RosterEntry {
                unique_number: r.get(0)?,
                name: r.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
