/*!
Configuration of how a table is presented.

The core operations on a table take no configuration, as a truth table has no tunable behaviour.
All options here relate to the boundary where truth values become text.
*/
pub mod defaults;

pub type Marker = char;

#[derive(Debug, Clone)]
pub struct Config {
    /// The marker written for true.
    pub true_marker: Marker,

    /// The marker written for false.
    pub false_marker: Marker,

    /// Colour markers when writing to a terminal.
    pub colour: bool,

    /// Write the expression of each operator column below the header.
    pub show_expressions: bool,

    /// Write snapshots as json rather than as a grid.
    pub json: bool,

    /// Columns are separated by at least this many spaces.
    pub padding: usize,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            true_marker: TRUE_MARKER,
            false_marker: FALSE_MARKER,
            colour: COLOUR,
            show_expressions: false,
            json: false,
            padding: PADDING,
        }
    }
}

impl Config {
    /// The marker for the given truth value.
    pub fn marker(&self, value: bool) -> Marker {
        match value {
            true => self.true_marker,
            false => self.false_marker,
        }
    }
}
