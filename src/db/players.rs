use crate::db::connection::Db;
use crate::errors::{Error, Result};
use crate::models::PlayerBalance;
use rusqlite::params;
use tracing::{debug, instrument};

/// Returns one aggregated row per active player: id, name, and `saldo`
/// (sum of credits minus sum of debits over the player's transactions,
/// 0 with none).
///
/// Ordering: the guild account, matched by exact name, sorts first;
/// remaining rows sort by balance descending, ties broken by ascending
/// name. Inactive players are excluded entirely.
///
/// # Errors
///
/// Returns `Error::Database` / `Error::Rusqlite` if opening the connection
/// or running the aggregation fails.
#[instrument(skip(db))]
pub async fn list_balances(db: &Db, guild_name: &str) -> Result<Vec<PlayerBalance>> {
    let conn = db.open()?;

    let mut stmt = conn.prepare_cached(
        "SELECT p.id, p.name,
                COALESCE(SUM(CASE WHEN t.ttype = 'Credito' THEN t.amount ELSE 0 END), 0) -
                COALESCE(SUM(CASE WHEN t.ttype = 'Debito'  THEN t.amount ELSE 0 END), 0) AS saldo
         FROM players p
         LEFT JOIN transactions t ON t.player_id = p.id
         WHERE p.active = 1
         GROUP BY p.id
         ORDER BY CASE WHEN p.name = ?1 THEN 0 ELSE 1 END, saldo DESC, p.name ASC",
    )?;

    let row_iter = stmt.query_map(params![guild_name], |row| {
        Ok(PlayerBalance {
            id: row.get(0)?,
            name: row.get(1)?,
            saldo: row.get(2)?,
        })
    })?;

    let mut balances = Vec::new();
    for row in row_iter {
        balances
            .push(row.map_err(|e| Error::Database(format!("Failed to map balance row: {}", e)))?);
    }

    debug!("Fetched balances for {} active players.", balances.len());
    Ok(balances)
}
