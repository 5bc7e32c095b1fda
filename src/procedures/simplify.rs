//! Simplification of a formula by assignments forced by the formula.
//!
//! Two procedures, each of which makes assignments which are not decisions:
//! - [propagate_units] assigns the literal of each unit clause, until no clause is unit.
//! - [assign_pure_literals] assigns each pure literal, until no literal is pure.
//!
//! And [simplify], which applies both procedures until neither makes an assignment.
//!
//! Neither procedure examines whether the formula is in conflict, and a unit clause may be in conflict after some other unit clause is propagated.
//! Detecting a conflict is left to the caller.

use crate::{
    misc::log::targets::{self},
    problem::GenericProblem,
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// Assigns the literal of each unit clause, until no clause is unit.
///
/// Returns a count of the assignments made.
pub fn propagate_units<R: rand::Rng>(
    problem: &mut GenericProblem<R>,
) -> Result<usize, err::ProblemError> {
    let mut count = 0;
    while let Some(literal) = problem.unit_clause_literal() {
        log::trace!(target: targets::PROPAGATION, "Unit: {literal}");
        problem.set_literal(literal.atom(), literal.polarity(), false)?;
        count += 1;
    }
    Ok(count)
}

/// Assigns each pure literal, until no literal is pure.
///
/// Every pure literal found by a scan is assigned before the next scan.
/// As assigning a pure literal only removes clauses from the collection of clauses which are not satisfied, each remaining literal of the scan is still pure.
///
/// `buffer` is used to hold the pure literals of each scan, and is empty on return.
///
/// Returns a count of the assignments made.
pub fn assign_pure_literals<R: rand::Rng>(
    problem: &mut GenericProblem<R>,
    buffer: &mut Vec<CLiteral>,
) -> Result<usize, err::ProblemError> {
    let mut count = 0;
    loop {
        problem.pure_literals_into(buffer);
        if buffer.is_empty() {
            return Ok(count);
        }

        for literal in buffer.drain(..) {
            log::trace!(target: targets::PURE, "Pure: {literal}");
            problem.set_literal(literal.atom(), literal.polarity(), false)?;
            count += 1;
        }
    }
}

/// Applies [propagate_units] and [assign_pure_literals] until neither makes an assignment.
pub fn simplify<R: rand::Rng>(
    problem: &mut GenericProblem<R>,
    buffer: &mut Vec<CLiteral>,
) -> Result<(), err::ProblemError> {
    loop {
        let propagated = propagate_units(problem)?;
        let pure = assign_pure_literals(problem, buffer)?;
        if propagated == 0 && pure == 0 {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod simplify_tests {
    use crate::{config::Config, problem::Problem};

    use super::*;

    #[test]
    fn chain_of_units() {
        let mut problem = Problem::new(4, Config::default());
        for clause in [vec![1], vec![-1, 2], vec![-2, -3], vec![3, 4, -1]] {
            assert!(problem.add_clause(clause).is_ok());
        }

        assert_eq!(propagate_units(&mut problem), Ok(4));
        assert_eq!(problem.trail.literals, vec![1, 2, -3, 4]);
        assert!(problem.is_fully_satisfied());
    }

    #[test]
    fn propagation_to_conflict() {
        let mut problem = Problem::new(2, Config::default());
        for clause in [vec![1], vec![-1, 2], vec![-1, -2]] {
            assert!(problem.add_clause(clause).is_ok());
        }

        assert!(propagate_units(&mut problem).is_ok());
        assert!(problem.has_conflict());
    }

    #[test]
    fn pure_in_one_scan() {
        // Both 1 and 3 are pure, while 2 occurs with both polarities.
        let mut problem = Problem::new(3, Config::default());
        for clause in [vec![1, 2, 3], vec![-2, 3]] {
            assert!(problem.add_clause(clause).is_ok());
        }

        let mut buffer = Vec::default();
        assert_eq!(assign_pure_literals(&mut problem, &mut buffer), Ok(2));
        assert!(buffer.is_empty());
        assert!(problem.is_fully_satisfied());
    }

    #[test]
    fn fixpoint() {
        let mut problem = Problem::new(4, Config::default());
        for clause in [vec![1], vec![-1, 2, 3], vec![-2, -3], vec![3, 4]] {
            assert!(problem.add_clause(clause).is_ok());
        }

        // After 1 is propagated, 4 is the only pure literal.
        let mut buffer = Vec::default();
        assert!(simplify(&mut problem, &mut buffer).is_ok());
        assert_eq!(problem.trail.literals, vec![1, 4]);
        assert!(!problem.has_conflict());

        assert!(propagate_units(&mut problem).is_ok_and(|count| count == 0));
        assert!(problem.pure_literals().is_empty());
    }
}
