use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The total number of calls through a solve, with one call for each visit to a node of the search tree.
    pub calls: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of all decisions undone.
    pub backtracks: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
