/*!
Abstract elements of a truth table.

- [Operators](operator), and the catalog of all binary operators.
- [Columns](column), the headers of a table.
- [Rows](row), one valuation per row.
*/

pub mod column;
pub mod operator;
pub mod row;
