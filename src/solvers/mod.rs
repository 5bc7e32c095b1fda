/*!
Solvers --- each a distinct implementation of the [SatSolver] capability.

- [SimpleSolver], which copies the formula, reduced by each assignment.
- [TrailSolver], which keeps a single copy of the formula in a [problem](crate::problem), and records assignments on a trail.
  With the [satisfaction cache](crate::config::Config::satisfaction_cache) enabled, this is the `cached` solver.

Each solver reads a formula from some [ClauseSource], and then determines the satisfiability of the formula.
A solver is intended for a single formula, and loading a second formula replaces the first.

# Example
```rust
# use trail_sat::config::{Config, SolverKind};
# use trail_sat::io::ClauseList;
# use trail_sat::reports::Report;
# use trail_sat::solvers::solver_from_config;
for kind in SolverKind::ALL {
    let mut solver = solver_from_config(Config::for_solver(kind));

    let mut formula = ClauseList::new(3, vec![vec![1, 2], vec![-2, 3], vec![-1, -3]]);
    assert!(solver.load(&mut formula).is_ok());

    let response = solver.solve().unwrap();
    assert_eq!(response.outcome, Report::Satisfied);
}
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod monitor;
pub use monitor::Monitor;
mod simple;
pub use simple::SimpleSolver;
mod trail;
pub use trail::TrailSolver;

use crate::{
    config::{Config, SolverKind},
    io::{ClauseSource, Header},
    misc::log::targets::{self},
    reports::SolveResponse,
    types::err::ErrorKind,
};

use callbacks::{CallbackProgress, CallbackTerminate};

/// Information about a formula loaded to a solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadInfo {
    /// The header of the formula.
    pub header: Header,

    /// A count of the clauses read.
    pub read_clauses: usize,

    /// A count of the clauses read which were tautologies, and so not added.
    pub tautologies: usize,
}

impl LoadInfo {
    /// Notes a mismatch between the count of clauses declared by the header and the count of clauses read, if any.
    fn note_mismatch(&self) {
        if self.read_clauses != self.header.clause_count {
            log::warn!(target: targets::PROBLEM,
                "The header declared {} clauses, though {} clauses were read",
                self.header.clause_count, self.read_clauses
            );
        }
    }
}

/// The capability of determining the satisfiability of a formula.
pub trait SatSolver {
    /// The name of the solver.
    fn name(&self) -> &'static str;

    /// Reads the formula of `source` to the solver.
    ///
    /// Errors if the source is malformed, or if some clause of the source is not a clause over the atoms declared by the header of the source.
    fn load(&mut self, source: &mut dyn ClauseSource) -> Result<LoadInfo, ErrorKind>;

    /// Determines the satisfiability of the loaded formula.
    ///
    /// Errors only on a violation of some internal contract, in which case no result should be trusted.
    fn solve(&mut self) -> Result<SolveResponse, ErrorKind>;

    /// The counters of the most recent solve.
    fn counters(&self) -> &Counters;

    /// A count of the atoms of the loaded formula.
    fn literal_count(&self) -> usize;

    /// A count of the clauses stored from the loaded formula.
    fn clause_count(&self) -> usize;

    /// Sets a callback to be called periodically during a solve, which ends the solve if true is returned.
    fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>);

    /// Sets a callback to be called with the counters of a solve, at most once each progress interval.
    fn set_callback_progress(&mut self, callback: Box<CallbackProgress>);
}

/// The solver of `config`.
pub fn solver_from_config(config: Config) -> Box<dyn SatSolver> {
    match config.solver.value {
        SolverKind::Simple => Box::new(SimpleSolver::from_config(config)),
        SolverKind::NoCopy | SolverKind::Cached => Box::new(TrailSolver::from_config(config)),
    }
}
