//! Balance sheet assembly.
//!
//! The storage layer returns one aggregated row per active player; this
//! module derives the values the home view renders. All functions are
//! framework-agnostic and independent of storage.

use crate::models::PlayerBalance;

/// The home view's data: overall total, the guild treasury, and the
/// per-player rows (guild excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    /// Sum of rounded balances across every active player, guild included.
    pub total: i64,
    /// Rounded balance of the guild account; 0 if the row is absent.
    pub guild_cash: i64,
    /// Active players in listing order, without the guild row.
    pub players: Vec<PlayerBalance>,
}

impl BalanceSheet {
    /// Builds the sheet from aggregated rows.
    ///
    /// The guild row is matched by exact name equality. Row order is
    /// preserved for `players`; the aggregation query already sorts by
    /// balance descending with names breaking ties.
    #[must_use]
    pub fn from_rows(rows: Vec<PlayerBalance>, guild_name: &str) -> Self {
        let total = rows.iter().map(|row| round_to_i64(row.saldo)).sum();
        let guild_cash = rows
            .iter()
            .find(|row| row.name == guild_name)
            .map_or(0, |row| round_to_i64(row.saldo));
        let players = rows
            .into_iter()
            .filter(|row| row.name != guild_name)
            .collect();

        Self {
            total,
            guild_cash,
            players,
        }
    }
}

/// The one rounding rule for converting stored floats to displayed
/// integers: round half away from zero.
#[must_use]
pub fn round_to_i64(value: f64) -> i64 {
    // Cast safety: balances are game currency, far below 2^52.
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    rounded
}
