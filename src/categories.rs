use comfy_table::{Cell, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub code: &'static str,
    pub name: &'static str,
}

const fn cat(code: &'static str, name: &'static str) -> Category {
    Category { code, name }
}

pub const CATEGORIES: &[Category] = &[
    cat("1", "amazon"),
    cat("2", "eating out"),
    cat("3", "shopping"),
    cat("4", "misc"),
    cat("5", "costco"),
    cat("6", "gas"),
    cat("7", "grocery"),
    cat("8", "transit"),
    cat("9", "dogs"),
    cat("10", "payment"),
    cat("11", "bill"),
    cat("12", "vehicle"),
    cat("13", "pay check"),
    cat("14", "investments"),
    cat("15", "work"),
    cat("16", "gifts"),
];

/// Look up a category by the exact code the operator typed.
pub fn by_code(code: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.code == code)
}

pub fn catalog_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Category"]);
    for cat in CATEGORIES {
        table.add_row(vec![Cell::new(cat.code), Cell::new(cat.name)]);
    }
    table
}
