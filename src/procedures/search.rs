//! Determines the satisfiability of the formula of a problem.
//!
//! # Overview
//!
//! The search is DPLL, with chronological backtracking.
//! Each call of the search:
//!
//! - [Simplifies](crate::procedures::simplify) the formula, by propagating unit clauses and assigning pure literals until neither is possible.
//! - Examines the formula:
//!   + If every clause is satisfied, the formula is satisfiable (on the current valuation).
//!   + Otherwise, if some clause is in conflict, the current valuation cannot be extended to a satisfying valuation.
//! - Otherwise, chooses an atom without a value, and makes a decision on the atom.
//!
//! On a conflict, the search backtracks to the most recent decision which has not been tried with both polarities, and tries the opposite polarity.
//! If every decision has been tried with both polarities, the formula is unsatisfiable.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                      +-----------------+
//!   +------------------| make a decision |
//!   |                  +-----------------+
//!   |                           ⌃
//!   |                           | if the formula is neither satisfied nor in conflict
//!   ⌄                           |
//!   +-->+----------+    +---------------+
//! --+-->| simplify |--->| examine       |-----> satisfiable, if every clause is satisfied
//!   ⌃   +----------+    +---------------+
//!   |                           |
//!   |                           | if some clause is in conflict
//!   |                           ⌄
//!   |                  +-----------------+
//!   +------------------| backtrack       |-----> unsatisfiable, if no decision remains to be revised
//!                      +-----------------+
//! ```
//!
//! The search is given in two forms, selected by the [config](crate::config::Config::search):
//! - [search_iterative], with an explicit stack of decisions.
//! - [search_recursive](crate::procedures::recursive::search_recursive), with a call for each decision.
//!
//! Both forms make the same assignments in the same order, and so return the same result with the same count of calls.
//!
//! The [monitor](crate::solvers::Monitor) of the solve is consulted on each call, and if the monitor requests the search end, the search returns [Unknown](Report::Unknown) with the problem as is.
//!
//! # Example
//!
//! ```rust
//! # use trail_sat::config::Config;
//! # use trail_sat::problem::Problem;
//! # use trail_sat::procedures::search::solve;
//! # use trail_sat::reports::Report;
//! # use trail_sat::solvers::Monitor;
//! let config = Config::default();
//! let mut monitor = Monitor::new(&config);
//! let mut problem = Problem::new(2, config);
//!
//! assert!(problem.add_clause(vec![-1, 2]).is_ok());
//! assert!(problem.add_clause(vec![1, -2]).is_ok());
//!
//! assert_eq!(solve(&mut problem, &mut monitor), Ok(Report::Satisfied));
//! let assignments = problem.final_assignments();
//! assert_eq!(assignments[1], assignments[2]);
//! ```

use crate::{
    config::SearchForm,
    misc::log::targets::{self},
    problem::{GenericProblem, ProblemState},
    reports::Report,
    solvers::Monitor,
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

use super::{recursive::search_recursive, simplify::simplify};

/// A decision, and whether the opposite of the decision has been tried.
#[derive(Clone, Copy, Debug)]
struct Frame {
    literal: CLiteral,
    tried_opposite: bool,
}

/// Determines the satisfiability of the formula of `problem`, by the configured form of search.
///
/// On a [Satisfied](Report::Satisfied) result the valuation of the problem satisfies the formula, and on any result the state of the problem is updated to match.
pub fn solve<R: rand::Rng>(
    problem: &mut GenericProblem<R>,
    monitor: &mut Monitor,
) -> Result<Report, err::ErrorKind> {
    if problem.clause_db.contains_empty() {
        log::info!(target: targets::SEARCH, "The formula contains the empty clause");
        problem.state = ProblemState::Unsatisfiable;
        return Ok(Report::Unsatisfied);
    }

    problem.state = ProblemState::Solving;

    let mut buffer = Vec::with_capacity(problem.atom_count());
    let report = match problem.config.search.value {
        SearchForm::Iterative => search_iterative(problem, monitor, &mut buffer)?,
        SearchForm::Recursive => search_recursive(problem, monitor, &mut buffer)?,
    };

    match report {
        Report::Satisfied => {
            debug_assert!(problem.check_satisfaction().is_ok());
            problem.state = ProblemState::Satisfiable;
        }
        Report::Unsatisfied => problem.state = ProblemState::Unsatisfiable,
        Report::Unknown => {}
    }

    log::info!(target: targets::SEARCH, "{report} after {} calls", monitor.counters.calls);
    Ok(report)
}

/// The search, with an explicit stack of decisions.
pub fn search_iterative<R: rand::Rng>(
    problem: &mut GenericProblem<R>,
    monitor: &mut Monitor,
    buffer: &mut Vec<CLiteral>,
) -> Result<Report, err::ProblemError> {
    let mut frames: Vec<Frame> = Vec::with_capacity(problem.atom_count());

    'search_loop: loop {
        if monitor.call() {
            return Ok(Report::Unknown);
        }

        simplify(problem, buffer)?;

        if problem.is_fully_satisfied() {
            return Ok(Report::Satisfied);
        }

        if problem.has_conflict() {
            while let Some(frame) = frames.pop() {
                problem.rollback()?;
                monitor.counters.backtracks += 1;

                if !frame.tried_opposite {
                    let opposite = frame.literal.negate();
                    log::debug!(target: targets::SEARCH, "Backtrack, trying {opposite}");

                    problem.set_literal(opposite.atom(), opposite.polarity(), true)?;
                    frames.push(Frame {
                        literal: opposite,
                        tried_opposite: true,
                    });
                    continue 'search_loop;
                }
            }

            return Ok(Report::Unsatisfied);
        }

        let decision = problem.unassigned_variable()?;
        log::debug!(target: targets::SEARCH, "Decision {decision} at level {}", problem.trail.level());

        problem.set_literal(decision.atom(), decision.polarity(), true)?;
        monitor.counters.decisions += 1;
        frames.push(Frame {
            literal: decision,
            tried_opposite: false,
        });
    }
}

#[cfg(test)]
mod search_tests {
    use crate::{
        config::{Config, Heuristic},
        problem::Problem,
        structures::clause::CClause,
    };

    use super::*;

    fn solved(clauses: &[CClause], atom_count: usize, config: Config) -> (Report, Problem, Monitor) {
        let mut monitor = Monitor::new(&config);
        let mut problem = Problem::new(atom_count, config);
        for clause in clauses {
            assert!(problem.add_clause(clause.clone()).is_ok());
        }
        let report = solve(&mut problem, &mut monitor);
        assert!(report.is_ok());
        (report.unwrap_or(Report::Unknown), problem, monitor)
    }

    // Every assignment to three atoms, excluding one, is excluded.
    fn all_but_one(excluded: [bool; 3]) -> Vec<CClause> {
        let mut clauses = Vec::default();
        for mask in 0..8_u8 {
            let values = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0];
            if values == excluded {
                continue;
            }
            let clause = (0..3)
                .map(|index| match values[index] {
                    true => -(index as i32 + 1),
                    false => index as i32 + 1,
                })
                .collect();
            clauses.push(clause);
        }
        clauses
    }

    #[test]
    fn forms_agree() {
        let clauses = all_but_one([true, false, true]);

        for heuristic in [Heuristic::Random, Heuristic::Greedy, Heuristic::First] {
            let mut iterative_config = Config::default();
            iterative_config.heuristic.value = heuristic;
            iterative_config.search.value = SearchForm::Iterative;

            let mut recursive_config = iterative_config.clone();
            recursive_config.search.value = SearchForm::Recursive;

            let (i_report, i_problem, i_monitor) = solved(&clauses, 3, iterative_config);
            let (r_report, r_problem, r_monitor) = solved(&clauses, 3, recursive_config);

            assert_eq!(i_report, Report::Satisfied);
            assert_eq!(i_report, r_report);
            assert_eq!(i_problem.final_assignments(), vec![false, true, false, true]);
            assert_eq!(i_problem.final_assignments(), r_problem.final_assignments());

            assert_eq!(i_monitor.counters.calls, r_monitor.counters.calls);
            assert_eq!(i_monitor.counters.decisions, r_monitor.counters.decisions);
            assert_eq!(i_monitor.counters.backtracks, r_monitor.counters.backtracks);
        }
    }

    #[test]
    fn unsatisfiable_undoes_every_decision() {
        let mut clauses = all_but_one([true, true, true]);
        clauses.push(vec![-1, -2, -3]);

        for form in [SearchForm::Iterative, SearchForm::Recursive] {
            let mut config = Config::default();
            config.search.value = form;
            let (report, problem, _) = solved(&clauses, 3, config);

            assert_eq!(report, Report::Unsatisfied);
            assert_eq!(problem.state, ProblemState::Unsatisfiable);
            assert!(!problem.trail.decision_is_made());
        }
    }

    #[test]
    fn empty_clause() {
        let (report, problem, monitor) = solved(&[vec![1, 2], vec![]], 2, Config::default());
        assert_eq!(report, Report::Unsatisfied);
        assert_eq!(problem.report(), Report::Unsatisfied);
        assert_eq!(monitor.counters.calls, 0);
    }

    #[test]
    fn no_clauses() {
        let (report, problem, _) = solved(&[], 3, Config::default());
        assert_eq!(report, Report::Satisfied);
        assert_eq!(problem.final_assignments(), vec![false; 4]);
    }

    // Eight pigeons, each in one of seven holes, with at most one pigeon in each hole.
    fn pigeonhole() -> Vec<CClause> {
        let (pigeons, holes) = (8, 7);
        let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;

        let mut clauses: Vec<CClause> = Vec::default();
        for pigeon in 0..pigeons {
            clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
        }
        for hole in 0..holes {
            for pigeon in 0..pigeons {
                for other in (pigeon + 1)..pigeons {
                    clauses.push(vec![-atom(pigeon, hole), -atom(other, hole)]);
                }
            }
        }
        clauses
    }

    #[test]
    fn terminated() {
        let clauses = pigeonhole();

        for form in [SearchForm::Iterative, SearchForm::Recursive] {
            let mut config = Config::default();
            config.heuristic.value = Heuristic::First;
            config.search.value = form;

            let mut monitor = Monitor::new(&config);
            monitor.set_callback_terminate(Box::new(|| true));

            let mut problem = Problem::new(56, config);
            for clause in &clauses {
                assert!(problem.add_clause(clause.clone()).is_ok());
            }

            assert_eq!(solve(&mut problem, &mut monitor), Ok(Report::Unknown));
            assert_eq!(problem.state, ProblemState::Solving);
            assert_eq!(monitor.counters.calls, crate::config::CHECK_FREQUENCY);
        }
    }
}
