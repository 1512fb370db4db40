use std::io::Write;

use crossterm::{
    style::{PrintStyledContent, Stylize},
    QueueableCommand,
};

use ttt_lib::{
    config::Config,
    io::{grid, json},
    structures::operator::Catalog,
    table::Table,
};

fn invalid(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}

/// Draws a table to `out`, as json, as a plain grid, or as a grid with coloured truth values.
pub fn draw_table(
    out: &mut impl Write,
    table: &Table,
    catalog: &Catalog,
    config: &Config,
) -> std::io::Result<()> {
    if config.json {
        writeln!(out, "{}", json::snapshot_json(table).map_err(invalid)?)?;
        return out.flush();
    }

    if !config.colour {
        write!(out, "{}", grid::render(table, catalog, config).map_err(invalid)?)?;
        return out.flush();
    }

    let headers = grid::headers(table, catalog, config).map_err(invalid)?;
    let widths = grid::widths(&headers, table.column_count());
    let last = table.column_count().saturating_sub(1);

    for (line_index, line) in headers.iter().enumerate() {
        for (index, text) in line.iter().enumerate() {
            let cell = grid::pad(text, widths[index], config.padding, index == last);
            match line_index {
                0 => out.queue(PrintStyledContent(cell.bold()))?,
                _ => out.queue(PrintStyledContent(cell.dim()))?,
            };
        }
        writeln!(out)?;
    }

    for row in table.rows() {
        for (index, value) in row.iter().enumerate() {
            let marker = config.marker(*value).to_string();
            let cell = grid::pad(&marker, widths[index], config.padding, index == last);
            match value {
                true => out.queue(PrintStyledContent(cell.green()))?,
                false => out.queue(PrintStyledContent(cell.red()))?,
            };
        }
        writeln!(out)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_without_colour() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();

        let config = Config {
            colour: false,
            ..Config::default()
        };

        let mut out = Vec::new();
        assert!(draw_table(&mut out, &table, &catalog, &config).is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), "a\nT\nF\n");
    }

    #[test]
    fn coloured_cells_keep_markers() {
        let catalog = Catalog::standard();
        let mut table = Table::new();
        table.add_variable();

        let mut out = Vec::new();
        assert!(draw_table(&mut out, &table, &catalog, &Config::default()).is_ok());
        let drawn = String::from_utf8(out).unwrap();

        assert!(drawn.contains('T'));
        assert!(drawn.contains('F'));
        assert_eq!(drawn.lines().count(), 3);
    }
}
