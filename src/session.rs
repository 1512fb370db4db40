use std::{cell::RefCell, io::Write, rc::Rc};

use ttt_lib::{
    config::Config,
    dispatch::{
        library::{
            delta::{self, Delta},
            report::Report,
        },
        Dispatch,
    },
    structures::{
        column::Position,
        operator::{Catalog, OperatorIndex},
        row::RowValues,
    },
    table::{reference::reference_table, ColumnOk, Table},
    types::err,
};

use crate::window::draw_table;

const HELP: &str = "\
Commands:
  var                                   Add a variable.
  op <left> <operator> <right> <name>   Add a column applying <operator> to the columns <left> and <right>.
                                        Columns are given by position or label.
                                        Operators are given by name, hex label, or index (see 'ops').
  show                                  Display the table.
  json                                  Display the table as json.
  ops                                   List the operators.
  operands                              List the columns available as operands.
  expr <column>                         Display the expression, support, and classification of a column.
  reference                             Display a table of every operator.
  help                                  Display this message.
  quit                                  Leave.";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A table, the catalog used to extend it, and the dispatches sent since the last command.
pub struct Session {
    catalog: Catalog,
    table: Table,
    config: Config,
    dispatches: Rc<RefCell<Vec<Dispatch>>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let dispatches = Rc::new(RefCell::new(Vec::default()));
        let sink = dispatches.clone();
        let table = Table::with_dispatcher(Box::new(move |dispatch: &Dispatch| {
            sink.borrow_mut().push(dispatch.clone())
        }));

        Session {
            catalog: Catalog::standard(),
            table,
            config,
            dispatches,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Runs a single command, writing any output to `out`.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> std::io::Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let rest = words.collect::<Vec<_>>();

        match command {
            "var" | "v" => {
                self.table.add_variable();
                self.announce(out)?;
                draw_table(out, &self.table, &self.catalog, &self.config)?;
            }

            "op" | "o" => self.operator_column(&rest, out)?,

            "show" | "s" => draw_table(out, &self.table, &self.catalog, &self.config)?,

            "json" => {
                let config = Config {
                    json: true,
                    ..self.config.clone()
                };
                draw_table(out, &self.table, &self.catalog, &config)?
            }

            "ops" => {
                for signature in self.catalog.list_operators() {
                    let outputs = signature
                        .outputs()
                        .as_slice()
                        .as_markers(self.config.true_marker, self.config.false_marker);
                    writeln!(out, "{:>2} {:<5} {}", signature.index(), outputs, signature)?;
                }
            }

            "operands" => {
                for (label, position) in self.table.operands() {
                    writeln!(out, "{position:>2} {label}")?;
                }
            }

            "expr" => self.describe(rest.first().copied(), out)?,

            "reference" => match reference_table(&self.catalog) {
                Ok(reference) => draw_table(out, &reference, &self.catalog, &self.config)?,
                Err(e) => failure(out, e)?,
            },

            "help" | "h" | "?" => writeln!(out, "{HELP}")?,

            "quit" | "q" | "exit" => return Ok(Flow::Quit),

            unknown => writeln!(out, "Unknown command '{unknown}', try 'help'")?,
        }

        Ok(Flow::Continue)
    }

    /// Writes a line for each column announced since the last command.
    fn announce(&self, out: &mut impl Write) -> std::io::Result<()> {
        for dispatch in self.dispatches.borrow_mut().drain(..) {
            match dispatch {
                Dispatch::Delta(Delta::Table(delta::Table::Variable { position, label }))
                | Dispatch::Delta(Delta::Table(delta::Table::Operator {
                    position, label, ..
                })) => writeln!(out, "Operand {position}: {label}")?,

                Dispatch::Delta(Delta::Table(delta::Table::Skipped)) => {
                    writeln!(out, "Incomplete operator column, nothing added")?
                }

                Dispatch::Report(Report::Table(shape)) => log::debug!("Table of {shape}"),
            }
        }
        Ok(())
    }

    /// A column by position, or by the label of the first column with that label.
    fn operand(&self, word: &str) -> Option<Position> {
        match word.parse::<Position>() {
            Ok(position) => Some(position),
            Err(_) => self
                .table
                .operands()
                .find(|(label, _)| *label == word)
                .map(|(_, position)| position),
        }
    }

    /// The operator at the start of `words`, and the count of words used.
    ///
    /// Some operator names contain a space, e.g. `not A`, so two words are tried before one.
    fn operator(&self, words: &[&str]) -> Result<Option<(OperatorIndex, usize)>, err::OperatorError> {
        if let [first, second, ..] = words {
            if let Ok(index) = self.catalog.find(&format!("{first} {second}")) {
                return Ok(Some((index, 2)));
            }
        }
        match words.first() {
            None => Ok(None),
            Some(word) => Ok(Some((self.catalog.find(word)?, 1))),
        }
    }

    fn operator_column(&mut self, words: &[&str], out: &mut impl Write) -> std::io::Result<()> {
        let left = match words.first() {
            None => None,
            Some(word) => match self.operand(word) {
                Some(position) => Some(position),
                None => {
                    writeln!(out, "No column '{word}'")?;
                    return Ok(());
                }
            },
        };

        let (operator, used) = match self.operator(words.get(1..).unwrap_or_default()) {
            Ok(Some((index, used))) => (Some(index), used),
            Ok(None) => (None, 0),
            Err(e) => return failure(out, e),
        };

        let remaining = words.get(1 + used..).unwrap_or_default();

        let right = match remaining.first() {
            None => None,
            Some(word) => match self.operand(word) {
                Some(position) => Some(position),
                None => {
                    writeln!(out, "No column '{word}'")?;
                    return Ok(());
                }
            },
        };

        let name = remaining.get(1..).unwrap_or_default().join(" ");

        match self
            .table
            .add_operator_column(&self.catalog, left, operator, right, &name)
        {
            Ok(ColumnOk::Added(_)) => {
                self.announce(out)?;
                draw_table(out, &self.table, &self.catalog, &self.config)?;
            }
            Ok(ColumnOk::Skipped) => self.announce(out)?,
            Err(e) => failure(out, e)?,
        }

        Ok(())
    }

    fn describe(&self, word: Option<&str>, out: &mut impl Write) -> std::io::Result<()> {
        let Some(position) = word.and_then(|word| self.operand(word)) else {
            return writeln!(out, "expr requires a column");
        };

        let description = self.table.expression(&self.catalog, position).and_then(|expression| {
            let support = self
                .table
                .support(position)?
                .into_iter()
                .filter_map(|p| self.table.column(p).map(|c| c.label().to_string()))
                .collect::<Vec<_>>();
            let classification = self.table.classify(position)?;
            Ok((expression, support, classification))
        });

        match description {
            Ok((expression, support, classification)) => {
                writeln!(out, "{expression}")?;
                writeln!(out, "Support: {}", support.join(" "))?;
                writeln!(out, "{classification}")
            }
            Err(e) => failure(out, e),
        }
    }
}

/// Writes an error from the library, which leaves the table unchanged.
fn failure(out: &mut impl Write, error: impl Into<err::ErrorKind>) -> std::io::Result<()> {
    let error = error.into();
    log::info!("{error:?}");
    writeln!(out, "{error}")
}
