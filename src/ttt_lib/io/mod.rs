/*!
Writing tables for people and other programs.

- [grid] writes a table as plain text, using the markers of a [Config](crate::config::Config).
- [json] writes a snapshot of a table as json.
*/

pub mod grid;
pub mod json;
