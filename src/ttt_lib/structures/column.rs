/*!
Column headers of a table.

Each column is either a variable, whose values are fixed by enumerating every valuation, or the result of applying an operator to two earlier columns.
Columns are referred to by their (1-based) position, and are never changed or removed once made.
*/

use serde::Serialize;

use crate::structures::operator::OperatorIndex;

/// The (1-based) position of a column in a table.
pub type Position = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Variable,
    Operator,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable => write!(f, "variable"),
            Self::Operator => write!(f, "operator"),
        }
    }
}

/// How the values of a column were obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Derivation {
    Variable,
    Operator {
        left: Position,
        operator: OperatorIndex,
        right: Position,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Column {
    position: Position,
    label: String,
    derivation: Derivation,
}

impl Column {
    pub(crate) fn variable(position: Position, label: String) -> Self {
        Column {
            position,
            label,
            derivation: Derivation::Variable,
        }
    }

    pub(crate) fn operator(
        position: Position,
        label: String,
        left: Position,
        operator: OperatorIndex,
        right: Position,
    ) -> Self {
        Column {
            position,
            label,
            derivation: Derivation::Operator {
                left,
                operator,
                right,
            },
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ColumnKind {
        match self.derivation {
            Derivation::Variable => ColumnKind::Variable,
            Derivation::Operator { .. } => ColumnKind::Operator,
        }
    }

    pub fn derivation(&self) -> Derivation {
        self.derivation
    }

    /// Relabel a column, used only when building a table for display.
    pub(crate) fn relabel(&mut self, label: String) {
        self.label = label
    }
}

/// The label of the variable made `count` variables after the first.
///
/// Labels run through the lowercase alphabet, and then through the alphabet again with a suffix counting the pass.
///
/// ```rust
/// # use ttt_lib::structures::column::variable_label;
/// assert_eq!(variable_label(0), "a");
/// assert_eq!(variable_label(25), "z");
/// assert_eq!(variable_label(26), "a2");
/// assert_eq!(variable_label(53), "b3");
/// ```
pub fn variable_label(count: usize) -> String {
    let letter = (b'a' + (count % 26) as u8) as char;
    match count / 26 {
        0 => letter.to_string(),
        pass => format!("{letter}{}", pass + 1),
    }
}
