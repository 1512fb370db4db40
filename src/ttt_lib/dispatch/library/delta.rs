/*!
Details on some change to a table.
*/
use crate::structures::{column::Position, operator::OperatorIndex};

/// High level distinction of changes, by 'location' of the change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delta {
    /// Within a [table](crate::table::Table).
    Table(self::Table),
}

/// Changes within a [table](crate::table::Table).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Table {
    /// A variable column with the detailed label was added at the detailed position.
    Variable { position: Position, label: String },

    /// An operator column with the detailed label was added at the detailed position, from the detailed operands.
    Operator {
        position: Position,
        label: String,
        left: Position,
        operator: OperatorIndex,
        right: Position,
    },

    /// A request to add an operator column was missing some input, and so nothing was added.
    Skipped,
}
