//! Application configuration loaded from the environment.
//!
//! Older deployments of the ledger hard-coded the guild account name and
//! database location as module-level constants. Here every knob is an
//! explicit, named option on [`AppConfig`], read once at startup and passed
//! into the application.

use crate::errors::Result;
use rand::Rng;
use tracing::debug;

/// Runtime configuration for the ledger service.
///
/// Each field maps to one environment variable and falls back to a default
/// suitable for local use. A `.env` file is honored when present
/// (`dotenvy::dotenv` runs before this is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Filesystem path of the SQLite database (`GUILD_LEDGER_DB`).
    pub database_path: String,
    /// Name of the reserved treasury account (`GUILD_NAME`). Seeded at
    /// bootstrap and pinned first in the balance listing.
    pub guild_name: String,
    /// Address the HTTP server binds to (`BIND_ADDR`).
    pub bind_addr: String,
    /// Cookie-signing secret (`SESSION_SECRET`). When unset, a fresh random
    /// value is generated per process start, so sessions do not survive a
    /// restart; no current feature depends on them.
    pub session_secret: String,
}

impl AppConfig {
    /// Loads the configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_path = env_or("GUILD_LEDGER_DB", "data/guild_ledger.db");
        let guild_name = env_or("GUILD_NAME", "GUILDA");
        let bind_addr = env_or("BIND_ADDR", "0.0.0.0:5000");
        let session_secret = match std::env::var("SESSION_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                debug!("SESSION_SECRET not set; generating a per-process secret.");
                generate_secret()
            }
        };

        Ok(Self {
            database_path,
            guild_name,
            bind_addr,
            session_secret,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn generate_secret() -> String {
    format!("dev-{:032x}", rand::thread_rng().r#gen::<u128>())
}
