/*!
A plain text grid of a table.

The grid has a row of labels, optionally a row of expressions, and then one line for each row of the table.
Truth values are written with the markers of a [Config], and each cell is padded to the width of its column.

```rust
# use ttt_lib::config::Config;
# use ttt_lib::io::grid::render;
# use ttt_lib::structures::operator::Catalog;
# use ttt_lib::table::Table;
let catalog = Catalog::standard();
let mut table = Table::new();
table.add_variable();

assert_eq!(render(&table, &catalog, &Config::default()).unwrap(), "a\nT\nF\n");
```
*/

use crate::{config::Config, structures::operator::Catalog, table::Table, types::err};

/// The text written above the values of each column.
/// The first line holds labels, and the second (if requested) expressions of operator columns.
pub fn headers(
    table: &Table,
    catalog: &Catalog,
    config: &Config,
) -> Result<Vec<Vec<String>>, err::TableError> {
    let labels = table
        .columns()
        .iter()
        .map(|c| c.label().to_string())
        .collect::<Vec<_>>();

    let mut headers = vec![labels];

    if config.show_expressions {
        headers.push(table.expressions(catalog)?);
    }

    Ok(headers)
}

/// The width of each column, wide enough for each header and each marker.
pub fn widths(headers: &[Vec<String>], columns: usize) -> Vec<usize> {
    (0..columns)
        .map(|column| {
            headers
                .iter()
                .filter_map(|line| line.get(column))
                .map(|text| text.chars().count())
                .fold(1, usize::max)
        })
        .collect()
}

/// Pads `text` to `width`, followed by padding unless `last`.
pub fn pad(text: &str, width: usize, padding: usize, last: bool) -> String {
    let mut cell = text.to_string();
    if !last {
        let fill = width
            .saturating_add(padding)
            .saturating_sub(text.chars().count());
        cell.extend(std::iter::repeat(' ').take(fill));
    }
    cell
}

pub fn render(table: &Table, catalog: &Catalog, config: &Config) -> Result<String, err::TableError> {
    let headers = headers(table, catalog, config)?;
    let widths = widths(&headers, table.column_count());
    let last = table.column_count().saturating_sub(1);

    let mut grid = String::default();

    for line in &headers {
        for (index, text) in line.iter().enumerate() {
            grid.push_str(&pad(text, widths[index], config.padding, index == last));
        }
        grid.push('\n');
    }

    for row in table.rows() {
        for (index, value) in row.iter().enumerate() {
            let marker = config.marker(*value).to_string();
            grid.push_str(&pad(&marker, widths[index], config.padding, index == last));
        }
        grid.push('\n');
    }

    Ok(grid)
}
