/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided by the library.
The command line tool installs [env_logger](https://docs.rs/env_logger), and so logs for a target may be viewed by setting `RUST_LOG`, e.g. `RUST_LOG=search=trace`.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to building a [problem](crate::problem)
    pub const PROBLEM: &str = "problem";

    /// Logs related to [unit propagation](crate::procedures::simplify::propagate_units)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [pure literal elimination](crate::procedures::simplify::assign_pure_literals)
    pub const PURE: &str = "pure";

    /// Logs related to [search](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to the [trail](crate::db::trail)
    pub const TRAIL: &str = "trail";

    /// Logs related to the satisfied clause cache of the [clause database](crate::db::clause)
    pub const CACHE: &str = "cache";

    /// Logs related to [parsing](crate::io::dimacs)
    pub const PARSER: &str = "parser";
}
