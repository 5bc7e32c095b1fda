//! The search, by recursion.
//!
//! See [search](crate::procedures::search) for an overview.
//!
//! The depth of recursion is bounded by the count of atoms, though the call stack of the calling thread may be exhausted before this bound on large formulas.

use crate::{
    misc::log::targets::{self},
    problem::GenericProblem,
    reports::Report,
    solvers::Monitor,
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

use super::simplify::simplify;

/// The search, with a call for each decision.
pub fn search_recursive<R: rand::Rng>(
    problem: &mut GenericProblem<R>,
    monitor: &mut Monitor,
    buffer: &mut Vec<CLiteral>,
) -> Result<Report, err::ProblemError> {
    if monitor.call() {
        return Ok(Report::Unknown);
    }

    simplify(problem, buffer)?;

    if problem.is_fully_satisfied() {
        return Ok(Report::Satisfied);
    }

    if problem.has_conflict() {
        return Ok(Report::Unsatisfied);
    }

    let decision = problem.unassigned_variable()?;
    log::debug!(target: targets::SEARCH, "Decision {decision} at level {}", problem.trail.level());

    problem.set_literal(decision.atom(), decision.polarity(), true)?;
    monitor.counters.decisions += 1;

    match search_recursive(problem, monitor, buffer)? {
        Report::Unsatisfied => {}
        other => return Ok(other),
    }

    problem.rollback()?;
    monitor.counters.backtracks += 1;

    let opposite = decision.negate();
    log::debug!(target: targets::SEARCH, "Backtrack, trying {opposite}");
    problem.set_literal(opposite.atom(), opposite.polarity(), true)?;

    match search_recursive(problem, monitor, buffer)? {
        Report::Unsatisfied => {
            problem.rollback()?;
            monitor.counters.backtracks += 1;
            Ok(Report::Unsatisfied)
        }
        other => Ok(other),
    }
}
