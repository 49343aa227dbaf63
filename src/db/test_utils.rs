#![allow(dead_code)]
#![allow(clippy::expect_used)]
use crate::db::connection::Db;
use crate::db::schema;
use crate::errors::Result;
use chrono::Utc;
use rusqlite::{Connection, params};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")), // Default to TRACE for tests if RUST_LOG is not set
        )
        .with_test_writer() // Crucial for `cargo test` output
        .try_init(); // Use try_init to avoid panic if already initialized
}

// Helper to create a fresh on-disk database for testing. The handle opens a
// new connection per operation, so :memory: would hand every call an empty
// database; a temp file is required. The returned TempDir guard must stay
// alive for the duration of the test.
pub(crate) fn setup_test_db() -> Result<(Db, TempDir)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test_ledger.db");
    let db = Db::new(path.to_str().expect("temp path is valid UTF-8"));
    let conn = db.open()?;
    schema::create_tables(&conn)?;
    Ok((db, dir))
}

// Helper to quickly insert a test player (not using the bootstrap seeding
// for focused tests).
pub(crate) fn insert_player(conn: &Connection, name: &str, active: bool) -> Result<i64> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO players (name, active, created_at) VALUES (?1, ?2, ?3)")?;
    let id = stmt.insert(params![name, active, Utc::now()])?;
    Ok(id)
}

pub(crate) fn insert_tx(
    conn: &Connection,
    player_id: i64,
    ttype: &str,
    amount: f64,
    split_id: Option<i64>,
) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO transactions (player_id, ttype, amount, split_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    let id = stmt.insert(params![player_id, ttype, amount, split_id, Utc::now()])?;
    Ok(id)
}

pub(crate) struct DirectInsertSplitArgs {
    pub(crate) bruto: i64,
    pub(crate) reparo: i64,
    pub(crate) cobrar_taxa: bool,
    pub(crate) taxa_pct: f64,
    pub(crate) reparo_payer: &'static str,
    pub(crate) note: Option<&'static str>,
    pub(crate) pulled_by: Option<&'static str>,
    pub(crate) status: &'static str,
    pub(crate) approved: bool,
}

impl Default for DirectInsertSplitArgs {
    fn default() -> Self {
        Self {
            bruto: 0,
            reparo: 0,
            cobrar_taxa: true,
            taxa_pct: 25.0,
            reparo_payer: "JOGADORES",
            note: None,
            pulled_by: None,
            status: "Vendendo",
            approved: false,
        }
    }
}

pub(crate) fn insert_split(conn: &Connection, args: &DirectInsertSplitArgs) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO splits (bruto, reparo, cobrar_taxa, taxa_pct, reparo_payer, note, created_at, pulled_by, status, approved)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    let id = stmt.insert(params![
        args.bruto,
        args.reparo,
        args.cobrar_taxa,
        args.taxa_pct,
        args.reparo_payer,
        args.note,
        Utc::now(),
        args.pulled_by,
        args.status,
        args.approved,
    ])?;
    Ok(id)
}
