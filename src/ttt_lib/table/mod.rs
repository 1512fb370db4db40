/*!
A truth table, built one column at a time.

A table is an ordered sequence of [columns](Column) and an ordered sequence of [rows](Row), with each row holding one value for each column.
A table begins empty, and is extended in one of two ways:

- [add_variable](Table::add_variable) doubles each row, once with the new variable true and once with the new variable false.
- [add_operator_column](Table::add_operator_column) applies an operator to the values of two existing columns, row by row.

Operator columns are themselves candidates for further operator columns, and so formulas of any depth may be tabulated.

# Invariants

- Each row has exactly one value for each column.
- With *n* variables, there are 2*ⁿ* rows, one for each valuation of the variables (and no rows without variables).
- Columns are never removed or changed, and so a (1-based) position refers to the same column throughout the life of a table.

Each operation either completes, or (if given some invalid column or operator) returns an error and leaves the table exactly as it was.
Mutation requires exclusive access to the table, so there is no way to observe a partial change.

# Example

```rust
# use ttt_lib::structures::operator::Catalog;
# use ttt_lib::table::{ColumnOk, Table};
let catalog = Catalog::standard();
let mut table = Table::new();

let a = table.add_variable();
let b = table.add_variable();
let and = catalog.find("and").unwrap();

assert_eq!(
    table.add_operator_column(&catalog, Some(a), Some(and), Some(b), "a and b"),
    Ok(ColumnOk::Added(3))
);

assert_eq!(table.values_of(3), Ok(vec![true, false, false, false]));
```
*/

pub mod derivation;
pub mod reference;

use derivation::DerivationGraph;
use serde::Serialize;

use crate::{
    dispatch::{
        library::{
            delta::{self, Delta},
            report::{self, Report},
        },
        Dispatch, Dispatcher,
    },
    misc::log::targets::TABLE,
    structures::{
        column::{variable_label, Column, ColumnKind, Position},
        operator::{Catalog, OperatorIndex},
        row::{Row, RowValues},
    },
    types::err,
};

/// Ok results of a request to add an operator column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnOk {
    /// The column was added at the given position.
    Added(Position),

    /// Some input was missing, and so nothing was done.
    Skipped,
}

/// The columns and rows of a table, detached from the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    variables: usize,
    graph: DerivationGraph,
    dispatcher: Option<Dispatcher>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .finish()
    }
}

impl Table {
    pub fn new() -> Self {
        Table {
            columns: Vec::default(),
            rows: Vec::default(),
            variables: 0,
            graph: DerivationGraph::default(),
            dispatcher: None,
        }
    }

    /// A table which sends [dispatches](crate::dispatch) to the given dispatcher.
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Table {
            dispatcher: Some(dispatcher),
            ..Self::new()
        }
    }

    fn dispatch(&self, dispatch: Dispatch) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(&dispatch);
        }
    }

    fn dispatch_shape(&self) {
        if self.dispatcher.is_some() {
            let shape = report::Table {
                rows: self.row_count(),
                columns: self.column_count(),
            };
            self.dispatch(Dispatch::Report(Report::Table(shape)));
        }
    }

    /// Adds a variable, returning the position of the variable.
    ///
    /// The rows of the extended table are each row of the table extended with true, followed by each row of the table extended with false.
    /// On an empty table, the rows are [true] and [false].
    pub fn add_variable(&mut self) -> Position {
        let label = variable_label(self.variables);
        let position = self.columns.len() + 1;

        match self.rows.is_empty() {
            true => {
                self.rows = vec![vec![true], vec![false]];
            }
            false => {
                let mut false_rows = self.rows.clone();
                for row in &mut self.rows {
                    row.push(true);
                }
                for row in &mut false_rows {
                    row.push(false);
                }
                self.rows.append(&mut false_rows);
            }
        }

        self.columns.push(Column::variable(position, label.clone()));
        self.graph.add_column(position);
        self.variables += 1;

        log::trace!(target: TABLE, "Variable {label} at {position}, {} rows", self.rows.len());

        self.dispatch(Dispatch::Delta(Delta::Table(delta::Table::Variable {
            position,
            label,
        })));
        self.dispatch_shape();

        position
    }

    /// Adds a column whose values are given by applying `operator` to the values of the columns at `left` and `right`.
    ///
    /// If any input is missing, or the name is empty, nothing is done and [ColumnOk::Skipped] is returned.
    /// Otherwise, each position must be a column of the table and the operator must be in the catalog.
    pub fn add_operator_column(
        &mut self,
        catalog: &Catalog,
        left: Option<Position>,
        operator: Option<OperatorIndex>,
        right: Option<Position>,
        name: &str,
    ) -> Result<ColumnOk, err::TableError> {
        let (Some(left), Some(operator), Some(right)) = (left, operator, right) else {
            return Ok(self.skip());
        };
        if name.is_empty() {
            return Ok(self.skip());
        }

        let signature = catalog.get(operator)?;
        self.check_position(left)?;
        self.check_position(right)?;

        let position = self.columns.len() + 1;

        for row in &mut self.rows {
            let value = signature.apply(row[left - 1], row[right - 1]);
            row.push(value);
        }

        self.columns.push(Column::operator(
            position,
            name.to_string(),
            left,
            operator,
            right,
        ));
        self.graph.add_column(position);
        self.graph.add_operands(position, left, right);

        log::trace!(target: TABLE, "Operator {name} ({left} {signature} {right}) at {position}");

        self.dispatch(Dispatch::Delta(Delta::Table(delta::Table::Operator {
            position,
            label: name.to_string(),
            left,
            operator,
            right,
        })));
        self.dispatch_shape();

        Ok(ColumnOk::Added(position))
    }

    fn skip(&self) -> ColumnOk {
        log::debug!(target: TABLE, "Operator column skipped due to missing input");
        self.dispatch(Dispatch::Delta(Delta::Table(delta::Table::Skipped)));
        ColumnOk::Skipped
    }

    fn check_position(&self, position: Position) -> Result<(), err::TableError> {
        if (1..=self.columns.len()).contains(&position) {
            return Ok(());
        }
        log::warn!(target: TABLE, "Request for column {position} of {}", self.columns.len());
        Err(err::TableError::InvalidColumn {
            position,
            columns: self.columns.len(),
        })
    }

    /// Relabels the column at the given position.
    /// Only used when building tables for display, as labels of variables are otherwise fixed.
    pub(crate) fn relabel(
        &mut self,
        position: Position,
        label: String,
    ) -> Result<(), err::TableError> {
        self.check_position(position)?;
        self.columns[position - 1].relabel(label);
        Ok(())
    }
}

impl Table {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self, position: Position) -> Option<&Column> {
        match position {
            0 => None,
            _ => self.columns.get(position - 1),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// The label and position of each column, in the order the columns were added.
    ///
    /// These are the operands available to [add_operator_column](Table::add_operator_column).
    pub fn operands(&self) -> impl Iterator<Item = (&str, Position)> {
        self.columns.iter().map(|c| (c.label(), c.position()))
    }

    /// The positions of the columns of the given kind.
    pub fn positions_of(&self, kind: ColumnKind) -> impl Iterator<Item = Position> + '_ {
        self.columns
            .iter()
            .filter(move |c| c.kind() == kind)
            .map(|c| c.position())
    }

    /// The values of the column at the given position, from the first row to the last.
    pub fn values_of(&self, position: Position) -> Result<Vec<bool>, err::TableError> {
        self.check_position(position)?;
        Ok(self
            .rows
            .iter()
            .filter_map(|row| row.value_at(position))
            .collect())
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            columns: self.columns.clone(),
            rows: self.rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consistent(table: &Table) -> bool {
        table
            .rows()
            .iter()
            .all(|row| row.len() == table.column_count())
    }

    #[test]
    fn first_variable() {
        let mut table = Table::new();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);

        assert_eq!(table.add_variable(), 1);
        assert_eq!(table.rows(), &[vec![true], vec![false]]);
        assert_eq!(table.column(1).map(|c| c.label()), Some("a"));
        assert_eq!(table.column(1).map(|c| c.kind()), Some(ColumnKind::Variable));
    }

    #[test]
    fn second_variable_doubles() {
        let mut table = Table::new();
        table.add_variable();
        let before = table.rows().to_vec();

        assert_eq!(table.add_variable(), 2);
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 2);
        assert!(consistent(&table));

        for row in before {
            for value in [true, false] {
                let mut extended = row.clone();
                extended.push(value);
                assert!(table.rows().contains(&extended));
            }
        }

        assert_eq!(
            table.rows(),
            &[
                vec![true, true],
                vec![false, true],
                vec![true, false],
                vec![false, false]
            ]
        );
    }

    #[test]
    fn every_valuation_once() {
        let mut table = Table::new();
        for _ in 0..5 {
            table.add_variable();
        }

        assert_eq!(table.row_count(), 32);
        let mut rows = table.rows().to_vec();
        rows.sort();
        rows.dedup();
        assert_eq!(rows.len(), 32);
    }

    #[test]
    fn variables_after_operators() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        table.add_variable();

        let xor = catalog.find("xor").unwrap();
        assert!(table
            .add_operator_column(&catalog, Some(1), Some(xor), Some(2), "x")
            .is_ok());

        assert_eq!(table.add_variable(), 4);
        assert_eq!(table.column(4).map(|c| c.label()), Some("c"));
        assert_eq!(table.row_count(), 8);
        assert!(consistent(&table));

        // The operator column remains correct on the doubled rows.
        for row in table.rows() {
            assert_eq!(row[2], row[0] ^ row[1]);
        }
    }

    #[test]
    fn self_and() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        table.add_variable();

        let and = catalog.find("and").unwrap();
        assert_eq!(
            table.add_operator_column(&catalog, Some(1), Some(and), Some(1), "self-and"),
            Ok(ColumnOk::Added(3))
        );
        assert_eq!(table.values_of(3), table.values_of(1));
        assert_eq!(table.column(3).map(|c| c.kind()), Some(ColumnKind::Operator));
    }

    #[test]
    fn invalid_requests_change_nothing() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        let before = table.snapshot();

        assert_eq!(
            table.add_operator_column(&catalog, Some(1), Some(8), Some(2), "x"),
            Err(err::TableError::InvalidColumn {
                position: 2,
                columns: 1
            })
        );
        assert_eq!(
            table.add_operator_column(&catalog, Some(0), Some(8), Some(1), "x"),
            Err(err::TableError::InvalidColumn {
                position: 0,
                columns: 1
            })
        );
        assert_eq!(
            table.add_operator_column(&catalog, Some(1), Some(16), Some(1), "x"),
            Err(err::TableError::Operator(err::OperatorError::InvalidIndex(16)))
        );

        assert_eq!(before, table.snapshot());
    }

    #[test]
    fn empty_table_has_no_operands() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        assert!(table
            .add_operator_column(&catalog, Some(1), Some(0), Some(1), "x")
            .is_err());
        assert_eq!(table.operands().count(), 0);
    }
}
