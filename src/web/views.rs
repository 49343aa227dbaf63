//! Server-rendered HTML views.
//!
//! Pages are assembled with `format!` around one shared shell; there is no
//! template engine. Only [`crate::core::format::fmt_int`] carries an
//! observable formatting contract, everything else is presentation.

use crate::APP_VERSION;
use crate::core::balance::BalanceSheet;
use crate::core::format::fmt_int;
use crate::models::{Split, SplitTransaction};
use std::fmt::Write;

const STYLE: &str = "\
    body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f7; color: #1d1d1f; }\
    .container { max-width: 900px; margin: 0 auto; padding: 1.5rem; }\
    nav { background: #1d1d1f; padding: 0.75rem 1.5rem; }\
    nav a { color: #f5f5f7; text-decoration: none; margin-right: 1.25rem; font-weight: 600; }\
    h1 { font-size: 1.4rem; }\
    table { width: 100%; border-collapse: collapse; background: #fff; }\
    th, td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #d2d2d7; }\
    th { background: #fafafa; }\
    td.num, th.num { text-align: right; font-variant-numeric: tabular-nums; }\
    .stats { display: flex; gap: 1rem; margin: 1rem 0; }\
    .stat { background: #fff; border: 1px solid #d2d2d7; border-radius: 8px; padding: 1rem; flex: 1; }\
    .stat .value { font-size: 1.6rem; font-weight: 700; }\
    .stat .label { color: #6e6e73; font-size: 0.8rem; text-transform: uppercase; }\
    .muted { color: #6e6e73; }\
    footer { margin: 2rem 0 1rem; color: #6e6e73; font-size: 0.8rem; }";

/// Replaces the five HTML-significant characters. Applied to every value
/// that originates in the database.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title} - Guild Ledger</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Balances</a><a href=\"/splits\">Splits</a></nav>\n\
         <div class=\"container\">\n\
         {body}\n\
         <footer>guild-ledger {APP_VERSION}</footer>\n\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

fn opt(text: Option<&str>) -> String {
    text.map_or_else(|| "\u{2014}".to_string(), escape_html)
}

/// Home view: overall totals plus the per-player balance table.
pub fn index_page(sheet: &BalanceSheet, guild_name: &str) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>Balances</h1>\n\
         <div class=\"stats\">\n\
         <div class=\"stat\"><div class=\"value\">{total}</div><div class=\"label\">Total</div></div>\n\
         <div class=\"stat\"><div class=\"value\">{guild_cash}</div><div class=\"label\">{guild} cash</div></div>\n\
         <div class=\"stat\"><div class=\"value\">{count}</div><div class=\"label\">Active players</div></div>\n\
         </div>\n",
        total = fmt_int(sheet.total as f64),
        guild_cash = fmt_int(sheet.guild_cash as f64),
        guild = escape_html(guild_name),
        count = sheet.players.len(),
    );

    body.push_str("<table>\n<tr><th>Player</th><th class=\"num\">Saldo</th></tr>\n");
    for player in &sheet.players {
        let _ = write!(
            body,
            "<tr><td>{}</td><td class=\"num\">{}</td></tr>\n",
            escape_html(&player.name),
            fmt_int(player.saldo),
        );
    }
    body.push_str("</table>\n");

    page("Balances", &body)
}

/// Split listing view, newest first.
pub fn splits_page(splits: &[Split]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Splits</h1>\n<table>\n<tr><th>#</th><th>Created</th><th>Status</th><th class=\"num\">Gross</th><th>Pulled by</th><th>Approved</th></tr>\n");
    for split in splits {
        let _ = write!(
            body,
            "<tr>\
             <td><a href=\"/splits/{id}\">{id}</a></td>\
             <td class=\"muted\">{created}</td>\
             <td>{status}</td>\
             <td class=\"num\">{bruto}</td>\
             <td>{pulled_by}</td>\
             <td>{approved}</td>\
             </tr>\n",
            id = split.id,
            created = opt(split.created_at.as_deref()),
            status = escape_html(&split.status),
            bruto = fmt_int(split.bruto as f64),
            pulled_by = opt(split.pulled_by.as_deref()),
            approved = if split.approved { "yes" } else { "no" },
        );
    }
    body.push_str("</table>\n");

    page("Splits", &body)
}

/// Detail view for one split and its transactions.
pub fn split_detail_page(split: &Split, transactions: &[SplitTransaction]) -> String {
    let fee_label = if split.cobrar_taxa {
        format!("Fee ({}%)", split.taxa_pct)
    } else {
        "Fee (not charged)".to_string()
    };

    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>Split #{id}</h1>\n\
         <div class=\"stats\">\n\
         <div class=\"stat\"><div class=\"value\">{bruto}</div><div class=\"label\">Gross</div></div>\n\
         <div class=\"stat\"><div class=\"value\">{fee}</div><div class=\"label\">{fee_label}</div></div>\n\
         <div class=\"stat\"><div class=\"value\">{reparo}</div><div class=\"label\">Repair ({payer})</div></div>\n\
         <div class=\"stat\"><div class=\"value\">{net}</div><div class=\"label\">Net</div></div>\n\
         </div>\n\
         <p>Status: <strong>{status}</strong> &middot; Approved: {approved} &middot; Pulled by: {pulled_by} &middot; Created: <span class=\"muted\">{created}</span></p>\n\
         <p>{note}</p>\n",
        id = split.id,
        bruto = fmt_int(split.bruto as f64),
        fee = fmt_int(split.fee() as f64),
        reparo = fmt_int(split.reparo as f64),
        payer = escape_html(&split.reparo_payer),
        net = fmt_int(split.net_after_costs() as f64),
        status = escape_html(&split.status),
        approved = if split.approved { "yes" } else { "no" },
        pulled_by = opt(split.pulled_by.as_deref()),
        created = opt(split.created_at.as_deref()),
        note = opt(split.note.as_deref()),
    );

    body.push_str(
        "<table>\n<tr><th>Player</th><th>Type</th><th class=\"num\">Amount</th><th>Category</th><th>Note</th><th>Created</th></tr>\n",
    );
    for tx in transactions {
        let _ = write!(
            body,
            "<tr>\
             <td>{player}</td>\
             <td>{ttype}</td>\
             <td class=\"num\">{amount}</td>\
             <td>{category}</td>\
             <td>{note}</td>\
             <td class=\"muted\">{created}</td>\
             </tr>\n",
            player = escape_html(&tx.player_name),
            ttype = escape_html(&tx.ttype),
            amount = fmt_int(tx.amount),
            category = opt(tx.category.as_deref()),
            note = opt(tx.note.as_deref()),
            created = escape_html(&tx.created_at),
        );
    }
    body.push_str("</table>\n");

    page(&format!("Split #{}", split.id), &body)
}

/// Page rendered for any unknown resource.
pub fn not_found_page() -> String {
    page(
        "Not found",
        "<h1>404</h1>\n<p>The page you are looking for does not exist.</p>\n<p><a href=\"/\">Back to balances</a></p>",
    )
}

/// Generic failure page. Carries no detail about the underlying error.
pub fn error_page() -> String {
    page(
        "Server error",
        "<h1>500</h1>\n<p>Something went wrong. Try again in a moment.</p>\n<p><a href=\"/\">Back to balances</a></p>",
    )
}
