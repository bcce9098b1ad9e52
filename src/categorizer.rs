use colored::Colorize;

use crate::categories::{by_code, catalog_table, Category};
use crate::error::Result;
use crate::models::Transaction;
use crate::prompt::{LineSource, Reply};
use crate::store::MappingStore;

pub const SELECT_PROMPT: &str = "Select category and [Enter]:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Description was already remembered; nothing to add.
    Known(String),
    /// Operator picked a category for a new description.
    Chosen(&'static Category),
    /// Operator interrupted or input closed.
    Aborted,
}

/// Resolve a category for one transaction: exact lookup first, otherwise ask
/// the operator until a valid code is entered.
pub fn categorize(
    txn: &Transaction,
    store: &MappingStore,
    input: &mut dyn LineSource,
) -> Result<Resolution> {
    if let Some(label) = store.get(&txn.description) {
        println!(
            "Known Description: [{}] --> [{}]",
            txn.description,
            label.cyan()
        );
        return Ok(Resolution::Known(label.to_string()));
    }

    loop {
        println!("{}", "\u{2500}".repeat(60));
        println!("{txn}");
        println!();
        println!("{}", txn.description.bold());
        println!("{}", catalog_table());

        match input.read_line(SELECT_PROMPT)? {
            Reply::Line(answer) => {
                if let Some(category) = by_code(&answer) {
                    println!("{}", format!("\u{2192} {}", category.name).green());
                    return Ok(Resolution::Chosen(category));
                }
                log::debug!("rejected category answer {answer:?}");
                println!("{}", format!("Invalid choice: {answer:?}").red());
            }
            Reply::Interrupt | Reply::Eof => return Ok(Resolution::Aborted),
        }
    }
}
