use colored::Colorize;

use crate::categorizer::{categorize, Resolution};
use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::models::Transaction;
use crate::prompt::LineSource;
use crate::store::MappingStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Stopped by the operator; the mapping was saved before returning.
    Aborted,
}

/// One categorization run: the parsed export plus the mapping it grows.
pub struct Session {
    transactions: Vec<Transaction>,
    store: MappingStore,
    interrupt: Interrupt,
}

impl Session {
    pub fn new(transactions: Vec<Transaction>, store: MappingStore, interrupt: Interrupt) -> Self {
        Self {
            transactions,
            store,
            interrupt,
        }
    }

    /// Resolve every transaction from `start_index` on, remembering new
    /// descriptions as they are chosen. Earlier transactions are not prompted.
    pub fn run(&mut self, start_index: usize, input: &mut dyn LineSource) -> Result<Outcome> {
        if start_index > self.transactions.len() {
            log::warn!(
                "start index {start_index} is past the last of {} transactions",
                self.transactions.len()
            );
        }

        for (index, txn) in self.transactions.iter().enumerate().skip(start_index) {
            if self.interrupt.is_raised() {
                self.save_interrupted()?;
                return Ok(Outcome::Aborted);
            }
            println!("Index: [{index}]");
            match categorize(txn, &self.store, input)? {
                Resolution::Known(label) => {
                    log::debug!("{:?} already filed under {label}", txn.description);
                }
                Resolution::Chosen(category) => {
                    self.store.insert(&txn.description, category.name);
                }
                Resolution::Aborted => {
                    self.save_interrupted()?;
                    return Ok(Outcome::Aborted);
                }
            }
        }

        if self.interrupt.is_raised() {
            self.save_interrupted()?;
            return Ok(Outcome::Aborted);
        }
        self.store.save()?;
        Ok(Outcome::Completed)
    }

    /// Flush the mapping as it stands when the operator stops the run.
    pub fn save_interrupted(&self) -> Result<()> {
        println!("{}", "Saving Category Dict...".yellow());
        self.store.save()?;
        println!("{}", "Saved  Category Dict".yellow());
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn store(&self) -> &MappingStore {
        &self.store
    }
}
