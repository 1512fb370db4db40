/*!
How the columns of a table depend on one another.

Each operator column is derived from two (not necessarily distinct) earlier columns.
These dependencies form a directed acyclic graph, with an edge from each operand to the column it was used to derive, and with variables as sources.

From the graph:
- The [expression](Table::expression) of a column writes the derivation of a column as an infix formula.
- The [support](Table::support) of a column is the variables the column is derived from, whether or not the operators used ignore some operand.

The expression of a column is for display only, and is never read back.

```rust
# use ttt_lib::structures::operator::Catalog;
# use ttt_lib::table::Table;
let catalog = Catalog::standard();
let mut table = Table::new();
let (a, b, c) = (table.add_variable(), table.add_variable(), table.add_variable());

let and = catalog.find("and").ok();
let or = catalog.find("or").ok();
assert!(table.add_operator_column(&catalog, Some(a), and, Some(b), "ab").is_ok());
assert!(table.add_operator_column(&catalog, Some(4), or, Some(c), "abc").is_ok());

assert_eq!(table.expression(&catalog, 5).unwrap(), "((a and b) or c)");
assert_eq!(table.support(4).unwrap(), vec![a, b]);
```
*/

use std::borrow::Cow;

use petgraph::{
    algo::has_path_connecting,
    graph::{DiGraph, NodeIndex},
    visit::{Dfs, Reversed},
};

use crate::{
    misc::log::targets::DERIVATION,
    structures::{
        column::{ColumnKind, Derivation, Position},
        operator::Catalog,
    },
    table::Table,
    types::err,
};

/// The length (in bytes) past which the expression of an operand is written as the label of the operand.
pub const EXPRESSION_LIMIT: usize = 256;

/// The dependencies between the columns of a table.
///
/// The node of the column at position *p* has index *p - 1*, as nodes are added with columns and never removed.
#[derive(Clone, Debug, Default)]
pub(crate) struct DerivationGraph {
    graph: DiGraph<Position, ()>,
}

impl DerivationGraph {
    fn node(position: Position) -> NodeIndex {
        NodeIndex::new(position - 1)
    }

    pub(crate) fn add_column(&mut self, position: Position) {
        let node = self.graph.add_node(position);
        debug_assert_eq!(node, Self::node(position));
    }

    pub(crate) fn add_operands(&mut self, position: Position, left: Position, right: Position) {
        let node = Self::node(position);
        self.graph.add_edge(Self::node(left), node, ());
        self.graph.add_edge(Self::node(right), node, ());
    }

    /// The position of every column the column at `position` is derived from, including the column itself.
    pub(crate) fn ancestors(&self, position: Position) -> Vec<Position> {
        let reversed = Reversed(&self.graph);
        let mut dfs = Dfs::new(reversed, Self::node(position));

        let mut ancestors = Vec::default();
        while let Some(node) = dfs.next(reversed) {
            ancestors.push(self.graph[node]);
        }
        ancestors
    }

    pub(crate) fn connected(&self, from: Position, to: Position) -> bool {
        has_path_connecting(&self.graph, Self::node(from), Self::node(to), None)
    }
}

/// The values of a column, taken together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// True on every row.
    Tautology,

    /// False on every row.
    Contradiction,

    /// True on some rows, false on others.
    Contingent,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tautology => write!(f, "Tautology"),
            Self::Contradiction => write!(f, "Contradiction"),
            Self::Contingent => write!(f, "Contingent"),
        }
    }
}

impl Table {
    /// The derivation of the column at `position`, written as an infix formula of variable labels and operator names.
    ///
    /// An operand whose own expression is longer than [EXPRESSION_LIMIT] is written as its label in brackets, e.g. `[x]`.
    pub fn expression(
        &self,
        catalog: &Catalog,
        position: Position,
    ) -> Result<String, err::TableError> {
        self.check_position(position)?;
        let mut expressions = self.expressions_through(catalog, position)?;
        expressions.pop().ok_or(err::TableError::InvalidColumn {
            position,
            columns: self.columns.len(),
        })
    }

    /// The expression of each column, in column order.
    pub fn expressions(&self, catalog: &Catalog) -> Result<Vec<String>, err::TableError> {
        self.expressions_through(catalog, self.columns.len())
    }

    /// Expressions of the first `count` columns.
    ///
    /// Operands always precede the columns derived from them, so each expression is built from those already written.
    fn expressions_through(
        &self,
        catalog: &Catalog,
        count: usize,
    ) -> Result<Vec<String>, err::TableError> {
        let mut expressions: Vec<String> = Vec::with_capacity(count);

        for column in self.columns.iter().take(count) {
            let expression = match column.derivation() {
                Derivation::Variable => column.label().to_string(),

                Derivation::Operator {
                    left,
                    operator,
                    right,
                } => {
                    let operator = catalog.display_name(operator)?;
                    let left = self.operand_text(&expressions, left)?;
                    let right = self.operand_text(&expressions, right)?;
                    log::trace!(target: DERIVATION, "Expression of {} via {operator}", column.position());
                    format!("({left} {operator} {right})")
                }
            };
            expressions.push(expression);
        }

        Ok(expressions)
    }

    /// The text of an operand, from the expressions written so far.
    fn operand_text<'e>(
        &self,
        expressions: &'e [String],
        position: Position,
    ) -> Result<Cow<'e, str>, err::TableError> {
        let expression = position
            .checked_sub(1)
            .and_then(|index| expressions.get(index))
            .ok_or(err::TableError::InvalidColumn {
                position,
                columns: expressions.len(),
            })?;

        match expression.len() > EXPRESSION_LIMIT {
            true => Ok(Cow::Owned(format!("[{}]", self.columns[position - 1].label()))),
            false => Ok(Cow::Borrowed(expression)),
        }
    }

    /// The positions of the variables the column at `position` is derived from, in ascending order.
    ///
    /// The support of a variable is the variable itself.
    pub fn support(&self, position: Position) -> Result<Vec<Position>, err::TableError> {
        self.check_position(position)?;

        let mut support = self
            .graph
            .ancestors(position)
            .into_iter()
            .filter(|p| self.columns[p - 1].kind() == ColumnKind::Variable)
            .collect::<Vec<_>>();
        support.sort_unstable();
        Ok(support)
    }

    /// Whether the column at `position` is derived (perhaps indirectly) from the column at `from`.
    ///
    /// Every column is derived from itself.
    pub fn depends_on(&self, position: Position, from: Position) -> Result<bool, err::TableError> {
        self.check_position(position)?;
        self.check_position(from)?;
        Ok(self.graph.connected(from, position))
    }

    pub fn classify(&self, position: Position) -> Result<Classification, err::TableError> {
        let values = self.values_of(position)?;

        let classification = if values.iter().all(|v| *v) {
            Classification::Tautology
        } else if values.iter().all(|v| !*v) {
            Classification::Contradiction
        } else {
            Classification::Contingent
        };

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_variables() -> (Catalog, Table) {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        table.add_variable();
        (catalog, table)
    }

    #[test]
    fn unnamed_operators_in_expressions() {
        let (catalog, mut table) = two_variables();
        assert!(table
            .add_operator_column(&catalog, Some(2), Some(13), Some(1), "x")
            .is_ok());

        assert_eq!(table.expression(&catalog, 3), Ok("(b 0xd a)".to_string()));
        assert_eq!(table.expression(&catalog, 1), Ok("a".to_string()));
        assert!(table.expression(&catalog, 4).is_err());
    }

    #[test]
    fn long_chains_refer_to_labels() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();
        let and = catalog.find("and").ok();

        for link in 1..=64 {
            assert!(table
                .add_operator_column(&catalog, Some(link), and, Some(link), &format!("x{link}"))
                .is_ok());
        }

        let expressions = table.expressions(&catalog).unwrap();
        assert_eq!(expressions.len(), 65);
        assert_eq!(expressions[1], "(a and a)");
        assert_eq!(expressions[2], "((a and a) and (a and a))");

        for expression in &expressions {
            assert!(expression.len() <= 2 * EXPRESSION_LIMIT + 16);
        }
        assert_eq!(
            expressions[64],
            "((([x61] and [x61]) and ([x61] and [x61])) and (([x61] and [x61]) and ([x61] and [x61])))"
        );
        assert_eq!(table.expression(&catalog, 65).unwrap(), expressions[64]);
    }

    #[test]
    fn support_follows_operands() {
        let (catalog, mut table) = two_variables();
        table.add_variable();

        let not_a = catalog.find("not A").ok();
        assert!(table
            .add_operator_column(&catalog, Some(3), not_a, Some(3), "not c")
            .is_ok());
        assert!(table
            .add_operator_column(&catalog, Some(4), not_a, Some(1), "c")
            .is_ok());

        // The value of the first variable is ignored by 'not A', though it remains an operand.
        assert_eq!(table.support(5), Ok(vec![1, 3]));
        assert_eq!(table.support(4), Ok(vec![3]));
        assert_eq!(table.support(2), Ok(vec![2]));
        assert_eq!(table.depends_on(5, 4), Ok(true));
        assert_eq!(table.depends_on(5, 2), Ok(false));
        assert_eq!(table.depends_on(1, 1), Ok(true));
    }

    #[test]
    fn classifications() {
        let (catalog, mut table) = two_variables();
        let iff = catalog.find("iff").ok();
        let xor = catalog.find("xor").ok();

        assert!(table
            .add_operator_column(&catalog, Some(1), iff, Some(1), "a iff a")
            .is_ok());
        assert!(table
            .add_operator_column(&catalog, Some(1), xor, Some(1), "a xor a")
            .is_ok());

        assert_eq!(table.classify(1), Ok(Classification::Contingent));
        assert_eq!(table.classify(3), Ok(Classification::Tautology));
        assert_eq!(table.classify(4), Ok(Classification::Contradiction));
    }
}
