use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{CategorizeError, Result};
use crate::models::Transaction;
use crate::store::MappingStore;

/// Write every transaction with its category appended, one fully quoted
/// six-field line each. Every category is resolved before the file is
/// touched, so an unknown description leaves any existing output intact.
///
/// Fields are quoted here rather than by the csv quoter, which would double
/// any `"` inside a hand-edited category label instead of emitting it verbatim.
pub fn write_categorized(
    path: &Path,
    transactions: &[Transaction],
    store: &MappingStore,
) -> Result<usize> {
    let mut rows = Vec::with_capacity(transactions.len());
    for (index, txn) in transactions.iter().enumerate() {
        let category = store.get(&txn.description).ok_or_else(|| {
            CategorizeError::UnknownDescription {
                index,
                description: txn.description.clone(),
            }
        })?;
        rows.push(
            [
                txn.status.as_str(),
                txn.date.as_str(),
                txn.description.as_str(),
                txn.debit.as_str(),
                txn.credit.as_str(),
                category,
            ]
            .map(|field| format!("\"{field}\"")),
        );
    }

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;
    for row in &rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(rows.len())
}
