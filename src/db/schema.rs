use crate::db::connection::Db;
use crate::errors::{Error, Result};
use chrono::Utc;
use rusqlite::{Connection, params};
use tracing::{debug, info, instrument};

#[instrument(skip(conn))]
pub(crate) fn create_tables(conn: &Connection) -> Result<()> {
    debug!("Executing CREATE TABLE statements if tables do not exist.");
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_id INTEGER NOT NULL,
            ttype TEXT NOT NULL CHECK(ttype IN ('Credito','Debito')),
            amount REAL NOT NULL,
            category TEXT,
            note TEXT,
            split_id INTEGER, -- soft link to splits(id); deliberately no cascade
            created_at TEXT NOT NULL,
            FOREIGN KEY (player_id) REFERENCES players (id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS splits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bruto INTEGER NOT NULL DEFAULT 0,
            reparo INTEGER NOT NULL DEFAULT 0,
            cobrar_taxa INTEGER NOT NULL DEFAULT 1,
            taxa_pct REAL NOT NULL DEFAULT 25.0,
            reparo_payer TEXT NOT NULL DEFAULT 'JOGADORES',
            note TEXT,
            created_at TEXT NOT NULL,
            pulled_by TEXT,
            status TEXT NOT NULL DEFAULT 'Vendendo',
            approved INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_tx_player ON transactions(player_id);
        CREATE INDEX IF NOT EXISTS idx_tx_split ON transactions(split_id);
        CREATE INDEX IF NOT EXISTS idx_players_active ON players(active);
        CREATE INDEX IF NOT EXISTS idx_splits_created ON splits(id);
        COMMIT;",
    )
    .map_err(|e| Error::Database(format!("Failed to create tables: {}", e)))?;
    Ok(())
}

/// Inserts the reserved guild account if no player by that name exists.
///
/// The row is created active with the current UTC time; an existing row is
/// left untouched whatever its state.
#[instrument(skip(conn))]
pub(crate) fn seed_guild_account(conn: &Connection, guild_name: &str) -> Result<()> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM players WHERE name = ?1")?;
    let exists = stmt.exists(params![guild_name])?;
    if exists {
        debug!("Guild account '{}' already present. Skipping seed.", guild_name);
        return Ok(());
    }

    conn.execute(
        "INSERT INTO players (name, active, created_at) VALUES (?1, 1, ?2)",
        params![guild_name, Utc::now()],
    )?;
    info!("Seeded guild account '{}'.", guild_name);
    Ok(())
}

/// Idempotently ensures the tables, indexes, and guild account exist.
///
/// Called at process start and again at the top of the home view; with the
/// schema in place it performs two cheap reads and no writes.
///
/// # Errors
///
/// Any storage failure propagates to the caller, which treats it as fatal
/// for the request or startup.
#[instrument(skip(db))]
pub async fn ensure_schema(db: &Db, guild_name: &str) -> Result<()> {
    let conn = db.open()?;
    create_tables(&conn)?;
    seed_guild_account(&conn, guild_name)
}
