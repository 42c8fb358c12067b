use rusqlite::Connection;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use uuid::Uuid;

pub const DEFAULT_NAME: &str = "Unknown";

/// One roster row. Only these two columns are consumed; anything else in
/// the file is ignored. Both are optional at the parse level so that a
/// file missing the name column (or a row with a blank cell) still loads.
#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default)]
    unique_number: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Imports a CSV roster into a class, one row at a time.
///
/// Rows without a unique_number are skipped. Each usable row becomes an
/// insert-or-ignore, so a unique_number already in the store keeps the
/// name and class it was first imported with. The returned count is the
/// number of distinct unique_numbers seen in this batch, which can
/// exceed the number of rows actually created.
///
/// A parse failure aborts the import mid-stream. Rows inserted before the
/// failure stay committed; there is no wrapping transaction.
pub fn import_roster<R: Read>(
    conn: &Connection,
    class_id: &str,
    input: R,
) -> anyhow::Result<usize> {
    let mut rdr = csv::Reader::from_reader(input);
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO students(id, unique_number, name, class_id)
         VALUES(?, ?, ?, ?)",
    )?;

    let mut seen: HashSet<String> = HashSet::new();
    for result in rdr.deserialize::<RosterRow>() {
        let row = result?;
        let Some(unique_number) = row.unique_number.filter(|u| !u.is_empty()) else {
            continue;
        };
        let name = row
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        stmt.execute((
            Uuid::new_v4().to_string(),
            &unique_number,
            &name,
            class_id,
        ))?;
        seen.insert(unique_number);
    }

    Ok(seen.len())
}
