//! A table as json, for display or for handing to some other tool.
//!
//! Tables are written and never read, so there is no json form to load a table from.

use crate::table::Table;

/// The [snapshot](Table::snapshot) of a table as (pretty) json.
///
/// ```rust
/// # use ttt_lib::io::json::snapshot_json;
/// # use ttt_lib::table::Table;
/// let mut table = Table::new();
/// table.add_variable();
///
/// let json = snapshot_json(&table).unwrap();
/// assert!(json.contains("\"label\": \"a\""));
/// ```
pub fn snapshot_json(table: &Table) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&table.snapshot())
}
