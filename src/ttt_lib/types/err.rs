//! Error types used in the library.
//!
//! - Errors here are precondition violations, e.g. a request to combine a column which does not exist.
//!   A request which fails leaves the table exactly as it was.
//! - A request with missing inputs is *not* an error, see [ColumnOk::Skipped](crate::table::ColumnOk::Skipped).
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

use crate::structures::operator::OperatorIndex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Operator(OperatorError),
    Table(TableError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(e) => write!(f, "{e}"),
            Self::Table(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when looking up an operator in the catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperatorError {
    /// The index is not in [0, 16).
    InvalidIndex(OperatorIndex),

    /// A selector did not match any name, hex label, or index.
    UnknownSelector,
}

impl std::fmt::Display for OperatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex(index) => write!(f, "No operator has index {index}"),
            Self::UnknownSelector => write!(f, "No operator matches the selector"),
        }
    }
}

impl From<OperatorError> for ErrorKind {
    fn from(e: OperatorError) -> Self {
        ErrorKind::Operator(e)
    }
}

/// Errors when extending a table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableError {
    /// A (1-based) column position outside of the table, paired with the column count at the time.
    InvalidColumn { position: usize, columns: usize },

    /// The operator requested is not part of the catalog.
    Operator(OperatorError),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColumn { position, columns } => {
                write!(f, "Column {position} is not one of the {columns} columns")
            }
            Self::Operator(e) => write!(f, "{e}"),
        }
    }
}

impl From<OperatorError> for TableError {
    fn from(e: OperatorError) -> Self {
        TableError::Operator(e)
    }
}

impl From<TableError> for ErrorKind {
    fn from(e: TableError) -> Self {
        ErrorKind::Table(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let operator = OperatorError::InvalidIndex(20);
        let table: TableError = operator.into();
        assert_eq!(table, TableError::Operator(operator));

        let kind: ErrorKind = table.into();
        assert_eq!(kind.to_string(), "No operator has index 20");

        let kind: ErrorKind = TableError::InvalidColumn {
            position: 3,
            columns: 2,
        }
        .into();
        assert_eq!(kind.to_string(), "Column 3 is not one of the 2 columns");
    }
}
