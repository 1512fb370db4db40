use crate::config::{self};

pub const TRUE_MARKER: config::Marker = 'T';
pub const FALSE_MARKER: config::Marker = 'F';
pub const COLOUR: bool = true;
pub const PADDING: usize = 1;
