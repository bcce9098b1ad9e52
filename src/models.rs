use std::fmt;

/// One row of the bank export. Fields are kept exactly as captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub status: String,
    pub date: String,
    pub description: String,
    pub debit: String,
    pub credit: String,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Status:      {}", self.status)?;
        writeln!(f, "  Date:        {}", self.date)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Debit:       {}", self.debit)?;
        write!(f, "  Credit:      {}", self.credit)
    }
}
