/*!
A row of a table: one truth value per column.

The values of the variable columns of a row are a valuation, and the values of the operator columns follow from that valuation.
*/

/// The canonical representation of a row.
pub type Row = Vec<bool>;

/// Something which can be read as the values of a row.
pub trait RowValues {
    /// The value in the given (1-based) column, if the row has such a column.
    fn value_at(&self, position: usize) -> Option<bool>;

    /// The row written with the given markers, one per column.
    fn as_markers(&self, true_marker: char, false_marker: char) -> String;
}

impl<T: std::ops::Deref<Target = [bool]>> RowValues for T {
    fn value_at(&self, position: usize) -> Option<bool> {
        match position {
            0 => None,
            _ => self.get(position - 1).copied(),
        }
    }

    fn as_markers(&self, true_marker: char, false_marker: char) -> String {
        self.iter()
            .map(|value| match value {
                true => true_marker,
                false => false_marker,
            })
            .collect()
    }
}
