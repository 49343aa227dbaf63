/// Balance sheet assembly from aggregated player rows
pub mod balance;

/// Locale-fixed number formatting for the HTML views
pub mod format;
