/*!
A table of every operator in a catalog, for reference.

The table has two variables, `A` and `B`, followed by one column for each operator labelled with the display name of the operator.
Rows are in signature order, (T, T), (T, F), (F, T), (F, F), so the column of an operator reads as its signature.

```rust
# use ttt_lib::structures::operator::Catalog;
# use ttt_lib::table::reference::reference_table;
let catalog = Catalog::standard();
let table = reference_table(&catalog).unwrap();

assert_eq!(table.column_count(), 18);
assert_eq!(table.column(11).map(|c| c.label()), Some("and"));
assert_eq!(table.values_of(11).unwrap(), vec![true, false, false, false]);
```
*/

use crate::{
    misc::log::targets::TABLE,
    structures::operator::{Catalog, OperatorIndex},
    table::{ColumnOk, Table},
    types::err,
};

pub fn reference_table(catalog: &Catalog) -> Result<Table, err::TableError> {
    let mut table = Table::new();

    let a = table.add_variable();
    let b = table.add_variable();
    table.relabel(a, "A".to_string())?;
    table.relabel(b, "B".to_string())?;

    for signature in catalog.list_operators() {
        let index: OperatorIndex = signature.index();
        let label = signature.display_name();
        match table.add_operator_column(catalog, Some(a), Some(index), Some(b), &label)? {
            ColumnOk::Added(_) => {}
            ColumnOk::Skipped => {
                log::error!(target: TABLE, "Reference column {label} skipped");
            }
        }
    }

    // Each row is determined by the values of A and B, so ordering whole rows orders by A and then B.
    table.rows.sort_by(|x, y| y.cmp(x));

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::column::ColumnKind;

    #[test]
    fn columns_read_as_signatures() {
        let catalog = Catalog::standard();
        let table = reference_table(&catalog).unwrap();

        assert_eq!(table.row_count(), 4);
        assert_eq!(table.values_of(1), Ok(vec![true, true, false, false]));
        assert_eq!(table.values_of(2), Ok(vec![true, false, true, false]));

        for signature in catalog.list_operators() {
            let position = signature.index() as usize + 3;
            assert_eq!(table.values_of(position), Ok(signature.outputs().to_vec()));
            assert_eq!(
                table.column(position).map(|c| c.label().to_string()),
                Some(signature.display_name())
            );
        }
    }

    #[test]
    fn headers() {
        let catalog = Catalog::standard();
        let table = reference_table(&catalog).unwrap();

        let labels = table.operands().map(|(label, _)| label).collect::<Vec<_>>();
        assert_eq!(&labels[..4], &["A", "B", "false", "nor"]);
        assert_eq!(table.positions_of(ColumnKind::Variable).count(), 2);
        assert_eq!(table.positions_of(ColumnKind::Operator).count(), 16);
    }
}
