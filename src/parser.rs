use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CategorizeError, Result};
use crate::models::Transaction;

// Five quoted fields: status, MM/DD/YYYY date, description, debit, credit.
// Descriptions may span lines; amounts are empty or N[,NNN].NN.
const ROW_PATTERN: &str = concat!(
    r#""([a-zA-Z]+)","#,
    r#""([0-9]{2}/[0-9]{2}/[0-9]{4})","#,
    r#""([a-zA-Z0-9#\-&.* ,':\n/`!]+)","#,
    r#""((?:(?:[0-9]+,)?[0-9]+\.[0-9]{2})?)","#,
    r#""((?:(?:[0-9]+,)?[0-9]+\.[0-9]{2})?)""#,
);

fn row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ROW_PATTERN).expect("row pattern compiles"))
}

/// Extract every well-formed row from the export, in source order.
/// Anything that does not match (headers, blank lines, malformed rows) is skipped.
pub fn parse_transactions(data: &str) -> Vec<Transaction> {
    row_regex()
        .captures_iter(data)
        .map(|caps| Transaction {
            status: caps[1].to_string(),
            date: caps[2].to_string(),
            description: caps[3].to_string(),
            debit: caps[4].to_string(),
            credit: caps[5].to_string(),
        })
        .collect()
}

pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>> {
    if !path.is_file() {
        return Err(CategorizeError::FileNotFound(path.to_path_buf()));
    }
    let data = std::fs::read_to_string(path)?;
    let transactions = parse_transactions(&data);
    log::debug!(
        "parsed {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}
