/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading DIMACS](crate::builder::dimacs)
    pub const PARSER: &str = "parser";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [occurrence analysis](crate::transform::occurrences)
    pub const OCCURRENCES: &str = "occurrences";

    /// Logs related to [gadgets](crate::transform::gadget)
    pub const GADGET: &str = "gadget";

    /// Logs related to the [transform](crate::transform) as a whole
    pub const TRANSFORM: &str = "transform";
}
