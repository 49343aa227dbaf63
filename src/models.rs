use serde::{Deserialize, Serialize};

/// Type tag stored on credit transactions. The literal value is enforced by
/// a CHECK constraint on the `transactions` table.
pub const TTYPE_CREDIT: &str = "Credito";
/// Type tag stored on debit transactions.
pub const TTYPE_DEBIT: &str = "Debito";

/// Default fee percentage for splits missing the field.
pub const DEFAULT_TAXA_PCT: f64 = 25.0;
/// Default repair-cost payer ("the players") for splits missing the field.
pub const DEFAULT_REPARO_PAYER: &str = "JOGADORES";
/// Default lifecycle status ("selling") for splits missing the field.
pub const DEFAULT_STATUS: &str = "Vendendo";

// Based on the "players" table, aggregated with its transactions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerBalance {
    pub id: i64,
    pub name: String,
    pub saldo: f64, // credits minus debits; REAL in storage
}

/// A split row exactly as stored, before normalization.
///
/// Databases created by older schema versions may lack columns or hold NULL
/// where the current DDL declares a default, so every such field reads as an
/// `Option`. Only the id is required.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawSplit {
    pub id: i64,
    pub bruto: Option<i64>,
    pub reparo: Option<i64>,
    pub cobrar_taxa: Option<bool>,
    pub taxa_pct: Option<f64>,
    pub reparo_payer: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub pulled_by: Option<String>,
    pub status: Option<String>,
    pub approved: Option<bool>,
}

/// One revenue-distribution event.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Split {
    pub id: i64,
    /// Gross amount of the sale.
    pub bruto: i64,
    /// Repair cost deducted from the distribution.
    pub reparo: i64,
    /// Whether the guild fee is charged on this split.
    pub cobrar_taxa: bool,
    /// Fee percentage applied to the gross amount.
    pub taxa_pct: f64,
    /// Who covers the repair cost; `"JOGADORES"` means the players do.
    pub reparo_payer: String,
    pub note: Option<String>,
    pub created_at: Option<String>,
    /// Player credited with pulling the sale.
    pub pulled_by: Option<String>,
    pub status: String,
    pub approved: bool,
}

impl Split {
    /// Normalizes a raw row, substituting the documented default for every
    /// absent field. Pure and idempotent: normalizing an already-normalized
    /// split yields the same value.
    #[must_use]
    pub fn from_raw(raw: RawSplit) -> Self {
        Self {
            id: raw.id,
            bruto: raw.bruto.unwrap_or(0),
            reparo: raw.reparo.unwrap_or(0),
            cobrar_taxa: raw.cobrar_taxa.unwrap_or(true),
            taxa_pct: raw.taxa_pct.unwrap_or(DEFAULT_TAXA_PCT),
            reparo_payer: raw
                .reparo_payer
                .unwrap_or_else(|| DEFAULT_REPARO_PAYER.to_string()),
            note: raw.note,
            created_at: raw.created_at,
            pulled_by: raw.pulled_by,
            status: raw.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            approved: raw.approved.unwrap_or(false),
        }
    }

    /// Whether the repair cost comes out of the players' distribution pool.
    #[must_use]
    pub fn players_pay_repair(&self) -> bool {
        self.reparo_payer == DEFAULT_REPARO_PAYER
    }

    /// Guild fee on the gross amount, rounded to whole units. Zero when the
    /// split is not charged a fee.
    #[must_use]
    pub fn fee(&self) -> i64 {
        if !self.cobrar_taxa {
            return 0;
        }
        // Cast safety: bruto is whole game currency, far below 2^52.
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let fee = (self.bruto as f64 * self.taxa_pct / 100.0).round() as i64;
        fee
    }

    /// Amount left for distribution after the fee and, when the players
    /// cover it, the repair cost.
    #[must_use]
    pub fn net_after_costs(&self) -> i64 {
        let repair = if self.players_pay_repair() {
            self.reparo
        } else {
            0
        };
        self.bruto - self.fee() - repair
    }
}

/// One transaction attached to a split, joined with the player's name for
/// display.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplitTransaction {
    pub id: i64,
    pub player_name: String,
    pub ttype: String,
    pub amount: f64,
    pub category: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    fn populated_raw() -> RawSplit {
        RawSplit {
            id: 7,
            bruto: Some(120_000),
            reparo: Some(4_000),
            cobrar_taxa: Some(false),
            taxa_pct: Some(10.0),
            reparo_payer: Some("GUILDA".to_string()),
            note: Some("boss loot".to_string()),
            created_at: Some("2025-11-03T19:30:00Z".to_string()),
            pulled_by: Some("Alice".to_string()),
            status: Some("Pago".to_string()),
            approved: Some(true),
        }
    }

    #[test]
    fn test_from_raw_applies_defaults_to_empty_row() {
        let split = Split::from_raw(RawSplit {
            id: 1,
            ..RawSplit::default()
        });

        assert_eq!(split.bruto, 0);
        assert_eq!(split.reparo, 0);
        assert!(split.cobrar_taxa);
        assert_eq!(split.taxa_pct, DEFAULT_TAXA_PCT);
        assert_eq!(split.reparo_payer, DEFAULT_REPARO_PAYER);
        assert_eq!(split.status, DEFAULT_STATUS);
        assert!(!split.approved);
        assert_eq!(split.note, None);
        assert_eq!(split.created_at, None);
        assert_eq!(split.pulled_by, None);
    }

    #[test]
    fn test_from_raw_passes_populated_fields_through() {
        let split = Split::from_raw(populated_raw());

        assert_eq!(split.bruto, 120_000);
        assert_eq!(split.reparo, 4_000);
        assert!(!split.cobrar_taxa);
        assert_eq!(split.taxa_pct, 10.0);
        assert_eq!(split.reparo_payer, "GUILDA");
        assert_eq!(split.status, "Pago");
        assert!(split.approved);
        assert_eq!(split.pulled_by.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_from_raw_is_idempotent() {
        let once = Split::from_raw(populated_raw());

        // Re-wrap the normalized split as a raw row and normalize again.
        let raw_again = RawSplit {
            id: once.id,
            bruto: Some(once.bruto),
            reparo: Some(once.reparo),
            cobrar_taxa: Some(once.cobrar_taxa),
            taxa_pct: Some(once.taxa_pct),
            reparo_payer: Some(once.reparo_payer.clone()),
            note: once.note.clone(),
            created_at: once.created_at.clone(),
            pulled_by: once.pulled_by.clone(),
            status: Some(once.status.clone()),
            approved: Some(once.approved),
        };
        let twice = Split::from_raw(raw_again);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_fee_charged_and_rounded() {
        let split = Split::from_raw(RawSplit {
            id: 1,
            bruto: Some(100_000),
            ..RawSplit::default()
        });
        // Default 25% fee.
        assert_eq!(split.fee(), 25_000);

        let odd = Split::from_raw(RawSplit {
            id: 2,
            bruto: Some(333),
            taxa_pct: Some(10.0),
            ..RawSplit::default()
        });
        assert_eq!(odd.fee(), 33, "33.3 rounds down to 33");
    }

    #[test]
    fn test_fee_skipped_when_not_charged() {
        let split = Split::from_raw(RawSplit {
            id: 1,
            bruto: Some(100_000),
            cobrar_taxa: Some(false),
            ..RawSplit::default()
        });
        assert_eq!(split.fee(), 0);
    }

    #[test]
    fn test_net_after_costs_depends_on_repair_payer() {
        let players_pay = Split::from_raw(RawSplit {
            id: 1,
            bruto: Some(100_000),
            reparo: Some(5_000),
            ..RawSplit::default()
        });
        assert_eq!(players_pay.net_after_costs(), 100_000 - 25_000 - 5_000);

        let guild_pays = Split::from_raw(RawSplit {
            id: 2,
            bruto: Some(100_000),
            reparo: Some(5_000),
            reparo_payer: Some("GUILDA".to_string()),
            ..RawSplit::default()
        });
        assert_eq!(guild_pays.net_after_costs(), 100_000 - 25_000);
    }
}
