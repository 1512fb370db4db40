//! A library for building truth tables, one column at a time.
//!
//! A [table] begins empty and grows in two ways:
//! - A variable may be added, doubling the rows of the table so that each valuation of the variables appears exactly once.
//! - An operator column may be added, by applying one of the sixteen binary boolean [operators](structures::operator) to two existing columns, row by row.
//!
//! Operator columns may themselves be combined, and so the table of any formula built from binary operators may be grown, with each subformula as a column.
//!
//! # Orientation
//!
//! - [structures] holds the elements of a table: operators (and their [catalog](structures::operator::Catalog)), columns, and rows.
//! - [table] holds the table, the two operations which extend a table, and tools to inspect how columns were [derived](table::derivation).
//! - [dispatch] supports observing changes to a table, e.g. to offer each new column as an operand.
//! - [io] writes tables as text or json.
//!
//! # Example
//!
//! ```rust
//! # use ttt_lib::structures::operator::Catalog;
//! # use ttt_lib::table::{ColumnOk, Table};
//! let catalog = Catalog::standard();
//! let mut table = Table::new();
//!
//! let p = table.add_variable();
//! let q = table.add_variable();
//!
//! let implies = catalog.find("->").ok();
//! let Ok(ColumnOk::Added(p_q)) = table.add_operator_column(&catalog, Some(p), implies, Some(q), "p -> q") else {
//!     panic!("Failed to add a column");
//! };
//!
//! let and = catalog.find("and").ok();
//! let Ok(ColumnOk::Added(mp)) = table.add_operator_column(&catalog, Some(p_q), and, Some(p), "mp") else {
//!     panic!("Failed to add a column");
//! };
//!
//! let Ok(ColumnOk::Added(check)) = table.add_operator_column(&catalog, Some(mp), implies, Some(q), "check") else {
//!     panic!("Failed to add a column");
//! };
//!
//! assert_eq!(table.values_of(check), Ok(vec![true; 4]));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made on each change to a table, with targets listed in [misc::log].
//! No logger is installed by the library.

pub mod config;
pub mod dispatch;
pub mod io;
pub mod misc;
pub mod structures;
pub mod table;
pub mod types;
