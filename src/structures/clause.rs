//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use trail_sat::structures::clause::{CClause, Clause, ClauseStatus};
//! let clause: CClause = vec![23, -41, -3];
//!
//! let mut valuation = vec![None; 42];
//! valuation[0] = Some(true);
//! valuation[23] = Some(false);
//! valuation[3] = Some(true);
//!
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Unit(-41));
//!
//! valuation[41] = Some(true);
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Conflict);
//! ```
//!
//! - The empty clause is always false (never true), and so is in conflict on every valuation.
//! - Clauses are scanned, never rewritten, during a solve.

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The status of a clause relative to a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false.
    Conflict,

    /// Exactly one literal of the clause has no value, and every other literal is false.
    Unit(CLiteral),

    /// At least two literals of the clause have no value, and no literal is true.
    Open,
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The status of the clause on a given valuation.
    ///
    /// A literal whose atom is missing from the valuation is treated as having no value.
    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self.literals() {
            dimacs_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            dimacs_string += "0";
        } else {
            dimacs_string.pop();
        }
        dimacs_string
    }

    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus {
        let mut unvalued = None;
        let mut unvalued_count = 0;

        for literal in self.literals() {
            match valuation.value_of(literal.atom()).flatten() {
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,
                Some(_) => {}
                None => {
                    unvalued_count += 1;
                    unvalued = Some(literal);
                }
            }
        }

        match (unvalued_count, unvalued) {
            (0, _) => ClauseStatus::Conflict,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Open,
        }
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }
}
