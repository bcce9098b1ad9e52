use std::io::{BufReader, IsTerminal};

use crate::cli::Cli;
use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::parser::read_transactions;
use crate::prompt::{LineSource, ReaderInput, TerminalInput};
use crate::session::{Outcome, Session};
use crate::settings::{default_category_dict, expand_home};
use crate::store::MappingStore;
use crate::writer::write_categorized;

pub fn run(cli: Cli) -> Result<Outcome> {
    let dict_path = cli
        .category_dict
        .map(expand_home)
        .unwrap_or_else(default_category_dict);

    let transactions = read_transactions(&cli.csv_file)?;
    let store = MappingStore::load(&dict_path)?;
    log::debug!(
        "{} known descriptions in {}",
        store.len(),
        store.path().display()
    );
    let interrupt = Interrupt::install()?;
    let mut session = Session::new(transactions, store, interrupt.clone());

    let stdin = std::io::stdin();
    let mut input: Box<dyn LineSource> = if stdin.is_terminal() {
        Box::new(TerminalInput::new(interrupt))
    } else {
        Box::new(ReaderInput::new(BufReader::new(stdin), interrupt))
    };

    let outcome = session.run(cli.start_index, input.as_mut())?;
    if outcome == Outcome::Aborted {
        return Ok(outcome);
    }

    let written = write_categorized(&cli.output_file, session.transactions(), session.store())?;
    println!(
        "Wrote {written} transactions to {}",
        cli.output_file.display()
    );
    Ok(outcome)
}
