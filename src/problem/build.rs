//! Methods for building a problem.

use crate::{
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::{self, ErrorKind},
};

use super::{
    preprocess::{check_literals, preprocess_clause, PreprocessingOk},
    GenericProblem, ProblemState,
};

/// Ok results when adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the problem.
    Added,

    /// The clause was a tautology (and so was not added to the problem).
    Tautology,
}

impl<R: rand::Rng> GenericProblem<R> {
    /// Reserves space for `clause_count` further clauses, e.g. the count declared by the header of a formula.
    ///
    /// As the count may come from an untrusted source, failure to allocate is an error rather than a panic.
    pub fn reserve_clauses(&mut self, clause_count: usize) -> Result<(), err::ClauseDBError> {
        self.clause_db.reserve(clause_count)
    }

    /// Adds a clause to the problem.
    ///
    /// Duplicate literals are removed from the clause, and a tautology is discarded.
    /// If the problem is [configured](crate::config::Config::sort_clauses) to do so, the literals of the clause are ordered by atom.
    ///
    /// Errors if some assignment has been made, or if some literal of the clause is not a literal over the atoms of the problem.
    /// An empty clause is added, and makes the problem unsatisfiable.
    ///
    /// ```rust
    /// # use trail_sat::problem::{ClauseOk, Problem};
    /// # use trail_sat::config::Config;
    /// let mut problem = Problem::new(2, Config::default());
    ///
    /// assert_eq!(problem.add_clause(vec![2, 1, 2]), Ok(ClauseOk::Added));
    /// assert_eq!(problem.add_clause(vec![1, -1]), Ok(ClauseOk::Tautology));
    /// assert!(problem.add_clause(vec![3]).is_err());
    ///
    /// assert_eq!(problem.clause_count(), 1);
    /// ```
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, ErrorKind> {
        if self.state != ProblemState::Input {
            return Err(ErrorKind::from(err::StateError::SolveInProgress));
        }

        let mut clause: CClause = clause.into();
        check_literals(&clause, self.atom_db.count())?;

        match preprocess_clause(&mut clause, self.config.sort_clauses.value) {
            PreprocessingOk::Tautology => {
                log::trace!(target: targets::PROBLEM, "Tautology discarded: {}", clause.as_dimacs(true));
                Ok(ClauseOk::Tautology)
            }

            PreprocessingOk::Clause => {
                if clause.is_empty() {
                    log::info!(target: targets::PROBLEM, "Empty clause added");
                }

                for literal in clause.literals() {
                    self.atom_db.note_occurrence(literal);
                }
                self.clause_db.store(clause);

                Ok(ClauseOk::Added)
            }
        }
    }
}

#[cfg(test)]
mod build_tests {
    use crate::{config::Config, problem::Problem};

    use super::*;

    #[test]
    fn occurrences_counted_once() {
        let mut problem = Problem::new(3, Config::default());
        assert!(problem.add_clause(vec![1, 1, -2]).is_ok());
        assert!(problem.add_clause(vec![-2, 3]).is_ok());
        assert!(problem.add_clause(vec![2, -2, 3]).is_ok());

        assert_eq!(problem.atom_db.occurrences(1).positive, 1);
        assert_eq!(problem.atom_db.occurrences(2).negative, 2);
        assert_eq!(problem.atom_db.occurrences(2).positive, 0);
        assert_eq!(problem.atom_db.occurrences(3).positive, 1);
    }

    #[test]
    fn no_clause_during_solve() {
        let mut problem = Problem::new(2, Config::default());
        assert!(problem.add_clause(vec![1, 2]).is_ok());
        assert!(problem.set_literal(1, true, true).is_ok());

        assert_eq!(
            problem.add_clause(vec![-1, 2]),
            Err(ErrorKind::State(err::StateError::SolveInProgress))
        );
    }

    #[test]
    fn malformed_literals() {
        let mut problem = Problem::new(2, Config::default());
        assert_eq!(
            problem.add_clause(vec![1, 0, 2]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::ZeroLiteral))
        );
        assert_eq!(
            problem.add_clause(vec![-3]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::AtomOutOfRange(3)))
        );
        assert_eq!(problem.clause_count(), 0);
    }

    #[test]
    fn empty_clause() {
        let mut problem = Problem::new(1, Config::default());
        assert_eq!(problem.add_clause(CClause::new()), Ok(ClauseOk::Added));
        assert!(problem.clause_db.contains_empty());
    }
}
