//! Queries on the status of the formula under the current valuation.
//!
//! Each query scans the clauses of the formula, skipping any clause known to be satisfied.
//! And, if satisfaction is cached, a scan which finds a clause to be satisfied records this, so later scans may skip the clause.
//!
//! As a consequence queries take a mutable reference to the problem, though no query changes the valuation, and the result of a query depends only on the valuation.
//! Calling a query twice without an assignment or rollback between the calls returns the same result.

use crate::{
    structures::{
        clause::{Clause, ClauseStatus},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self},
};

use super::GenericProblem;

/// Flag for an atom seen with positive polarity.
const SEEN_POSITIVE: u8 = 0b01;

/// Flag for an atom seen with negative polarity.
const SEEN_NEGATIVE: u8 = 0b10;

impl<R: rand::Rng> GenericProblem<R> {
    /// The index of the latest assignment on the trail, against which satisfaction is recorded.
    fn latest_assignment(&self) -> usize {
        self.trail.depth().saturating_sub(1)
    }

    /// True iff every clause has some literal which is true on the current valuation.
    pub fn is_fully_satisfied(&mut self) -> bool {
        let latest = self.latest_assignment();
        for index in 0..self.clause_db.count() {
            match self.clause_db.unsettled(index, self.atom_db.valuation(), latest) {
                None | Some((_, ClauseStatus::Satisfied)) => {}
                Some(_) => return false,
            }
        }
        true
    }

    /// True iff some clause has every literal false on the current valuation.
    ///
    /// Independent of [is_fully_satisfied](GenericProblem::is_fully_satisfied), as a formula may be neither satisfied nor in conflict.
    pub fn has_conflict(&mut self) -> bool {
        let latest = self.latest_assignment();
        for index in 0..self.clause_db.count() {
            let status = self.clause_db.unsettled(index, self.atom_db.valuation(), latest);
            if let Some((_, ClauseStatus::Conflict)) = status {
                return true;
            }
        }
        false
    }

    /// The unvalued literal of the first clause which has exactly one unvalued literal and every other literal false, if such a clause exists.
    ///
    /// A clause in conflict is not a unit clause, and detecting a conflict is left to [has_conflict](GenericProblem::has_conflict).
    pub fn unit_clause_literal(&mut self) -> Option<CLiteral> {
        let latest = self.latest_assignment();
        for index in 0..self.clause_db.count() {
            let status = self.clause_db.unsettled(index, self.atom_db.valuation(), latest);
            if let Some((_, ClauseStatus::Unit(literal))) = status {
                return Some(literal);
            }
        }
        None
    }

    /// Writes the pure literals of the formula to `buffer`, in order of atom.
    ///
    /// An unvalued atom is pure if the atom occurs with exactly one polarity across the clauses which are not satisfied, and the pure literal of the atom is the atom with that polarity.
    /// Satisfied clauses, and literals of atoms with some value, are ignored.
    ///
    /// Any existing contents of `buffer` are cleared.
    pub fn pure_literals_into(&mut self, buffer: &mut Vec<CLiteral>) {
        buffer.clear();

        // The flags are taken to appease the borrow checker, and restored at the end of the method.
        let mut seen = std::mem::take(&mut self.polarity_buffer);
        seen.iter_mut().for_each(|flags| *flags = 0);

        let latest = self.latest_assignment();
        for index in 0..self.clause_db.count() {
            let clause = match self.clause_db.unsettled(index, self.atom_db.valuation(), latest) {
                None | Some((_, ClauseStatus::Satisfied)) => continue,
                Some((clause, _)) => clause,
            };

            for &literal in clause {
                if self.atom_db.value_of(literal.atom()).is_none() {
                    seen[literal.atom() as usize] |= match literal.polarity() {
                        true => SEEN_POSITIVE,
                        false => SEEN_NEGATIVE,
                    };
                }
            }
        }

        for (atom, flags) in seen.iter().enumerate() {
            match *flags {
                SEEN_POSITIVE => buffer.push(CLiteral::new(atom as _, true)),
                SEEN_NEGATIVE => buffer.push(CLiteral::new(atom as _, false)),
                _ => {}
            }
        }

        self.polarity_buffer = seen;
    }

    /// The pure literals of the formula, in order of atom.
    ///
    /// See [pure_literals_into](GenericProblem::pure_literals_into), which avoids allocating a fresh vector on each call.
    pub fn pure_literals(&mut self) -> Vec<CLiteral> {
        let mut buffer = Vec::default();
        self.pure_literals_into(&mut buffer);
        buffer
    }

    /// The value of each atom, with any atom without a value valued `false`.
    ///
    /// The value of atom *a* is at index *a*, and index zero (the sentinel) is valued `false` by convention.
    pub fn final_assignments(&self) -> Vec<bool> {
        let mut assignments = vec![false; self.atom_db.count() + 1];
        for (atom, value) in self.atom_db.valuation().atom_value_pairs() {
            assignments[atom as usize] = value.unwrap_or(false);
        }
        assignments
    }

    /// Ensures the valuation satisfies every clause, for use as a check on a solve.
    pub fn check_satisfaction(&self) -> Result<(), err::ProblemError> {
        let valuation = self.atom_db.valuation();
        match self
            .clause_db
            .all_clauses()
            .all(|clause| clause.status_on(valuation) == ClauseStatus::Satisfied)
        {
            true => Ok(()),
            false => Err(err::ProblemError::UnsatisfiedClause),
        }
    }
}
