/*!
Reports on the state of a table after some change completes.
*/

/// The shape of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Table(self::Table),
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rows and {} columns", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape() {
        let shape = Table {
            rows: 4,
            columns: 3,
        };
        assert_eq!(shape.to_string(), "4 rows and 3 columns");
    }
}
