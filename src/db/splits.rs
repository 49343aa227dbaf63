use crate::db::connection::Db;
use crate::errors::{Error, Result};
use crate::models::{RawSplit, Split, SplitTransaction};
use rusqlite::types::FromSql;
use rusqlite::{OptionalExtension, Row, params};
use tracing::{debug, instrument};

/// Upper bound on the split listing; older events fall off the page.
pub const SPLIT_LIST_LIMIT: u32 = 500;

/// Reads one field of a split row, treating a missing column the same as a
/// stored NULL. Databases created by older schema versions lack the newer
/// columns entirely, so `SELECT *` plus per-field recovery stands in for a
/// migration.
fn opt_field<T: FromSql>(row: &Row<'_>, name: &str) -> Option<T> {
    row.get::<_, Option<T>>(name).ok().flatten()
}

fn raw_split_from_row(row: &Row<'_>) -> rusqlite::Result<RawSplit> {
    Ok(RawSplit {
        id: row.get("id")?,
        bruto: opt_field(row, "bruto"),
        reparo: opt_field(row, "reparo"),
        cobrar_taxa: opt_field(row, "cobrar_taxa"),
        taxa_pct: opt_field(row, "taxa_pct"),
        reparo_payer: opt_field(row, "reparo_payer"),
        note: opt_field(row, "note"),
        created_at: opt_field(row, "created_at"),
        pulled_by: opt_field(row, "pulled_by"),
        status: opt_field(row, "status"),
        approved: opt_field(row, "approved"),
    })
}

/// Returns the most recent splits, newest first, capped at
/// [`SPLIT_LIST_LIMIT`]. Every row is normalized; no filtering by status or
/// approval.
#[instrument(skip(db))]
pub async fn list_splits(db: &Db) -> Result<Vec<Split>> {
    let conn = db.open()?;

    let mut stmt =
        conn.prepare_cached("SELECT * FROM splits ORDER BY id DESC LIMIT ?1")?;
    let row_iter = stmt.query_map(params![SPLIT_LIST_LIMIT], raw_split_from_row)?;

    let mut splits = Vec::new();
    for row in row_iter {
        let raw =
            row.map_err(|e| Error::Database(format!("Failed to map split row: {}", e)))?;
        splits.push(Split::from_raw(raw));
    }

    debug!("Fetched {} splits.", splits.len());
    Ok(splits)
}

/// Fetches one split plus its transactions joined with the player name,
/// ordered by amount descending.
///
/// Returns `Ok(None)` when no split has the given id; the web layer turns
/// that into a not-found page rather than an error.
#[instrument(skip(db))]
pub async fn split_detail(
    db: &Db,
    split_id: i64,
) -> Result<Option<(Split, Vec<SplitTransaction>)>> {
    let conn = db.open()?;

    let mut stmt = conn.prepare_cached("SELECT * FROM splits WHERE id = ?1")?;
    let raw = stmt
        .query_row(params![split_id], raw_split_from_row)
        .optional()?;
    let Some(raw) = raw else {
        debug!("No split with id {}.", split_id);
        return Ok(None);
    };
    let split = Split::from_raw(raw);

    let mut stmt = conn.prepare_cached(
        "SELECT t.id, p.name AS player_name, t.ttype, t.amount, t.category, t.note, t.created_at
         FROM transactions t
         JOIN players p ON p.id = t.player_id
         WHERE t.split_id = ?1
         ORDER BY t.amount DESC",
    )?;
    let row_iter = stmt.query_map(params![split_id], |row| {
        Ok(SplitTransaction {
            id: row.get("id")?,
            player_name: row.get("player_name")?,
            ttype: row.get("ttype")?,
            amount: row.get("amount")?,
            category: row.get("category")?,
            note: row.get("note")?,
            created_at: row.get("created_at")?,
        })
    })?;

    let mut transactions = Vec::new();
    for row in row_iter {
        transactions.push(
            row.map_err(|e| Error::Database(format!("Failed to map transaction row: {}", e)))?,
        );
    }

    debug!(
        "Fetched split {} with {} transactions.",
        split.id,
        transactions.len()
    );
    Ok(Some((split, transactions)))
}
