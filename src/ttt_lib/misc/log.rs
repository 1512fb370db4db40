/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at trace level on each change to a table.

Note, no log implementation is provided by the library.
The `ttt` binary installs one when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [operator catalog](crate::structures::operator)
    pub const CATALOG: &str = "catalog";

    /// Logs related to [tables](crate::table)
    pub const TABLE: &str = "table";

    /// Logs related to [derivations](crate::table::derivation)
    pub const DERIVATION: &str = "derivation";
}
