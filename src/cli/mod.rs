pub mod categorize;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "categorize",
    about = "Assign a budget category to every transaction in a bank CSV export."
)]
pub struct Cli {
    /// CSV file to categorize
    pub csv_file: PathBuf,
    /// Location to store the resulting category CSV
    pub output_file: PathBuf,
    /// Dictionary of previously categorized descriptions
    /// (default: ~/.config/budget_tools/cat_dict.json)
    #[arg(short = 'd', long = "category_dict", visible_alias = "category-dict")]
    pub category_dict: Option<PathBuf>,
    /// Index of the first transaction to prompt for
    #[arg(
        short = 'i',
        long = "start_index",
        visible_alias = "start-index",
        default_value_t = 0
    )]
    pub start_index: usize,
}
