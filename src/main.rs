mod categories;
mod categorizer;
mod cli;
mod error;
mod interrupt;
mod models;
mod parser;
mod prompt;
mod session;
mod settings;
mod store;
mod writer;

use clap::Parser;

use cli::Cli;
use session::Outcome;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli::categorize::run(cli) {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Aborted) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
