//! The trail of assignments made during a solve.
//!
//! The trail is a pair of stacks:
//! - `literals`, each literal assigned during the solve in order of assignment.
//! - `level_indicies`, the index in `literals` at which each decision level begins.
//!
//! The first literal of each decision level is the decision, and every other literal of the level is a consequence of the decision (given the decisions below).
//! Literals below the first decision level are consequences of the formula alone, and are never undone.
//!
//! For example, the following trail records a consequence, a decision, two consequences of the decision, and a further decision:
//!
//! ```text
//! literals         [ -3, 1, 2, -4, 5 ]
//! level_indicies       [ 1,        4 ]
//! ```
//!
//! Forgetting the top level clears `5`, and after this forgetting the top level clears `1, 2, -4`.
//! No further level may be forgotten, as `-3` was not assigned after a decision.
//!
//! Both stacks are allocated once, with capacity for an assignment to every atom, and so assignments do not reallocate.

use crate::structures::literal::CLiteral;

#[derive(Default)]
pub struct Trail {
    pub literals: Vec<CLiteral>,
    pub level_indicies: Vec<usize>,
}

impl Trail {
    /// A trail with capacity to store an assignment to each of `atom_count` atoms.
    pub fn with_capacity(atom_count: usize) -> Self {
        Trail {
            literals: Vec::with_capacity(atom_count),
            level_indicies: Vec::with_capacity(atom_count),
        }
    }

    /// Stores a consequence of the top decision level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Notes that the next assignment stored is a decision, and so begins a fresh level.
    pub fn note_decision(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The current level, equivalently a count of the decisions made.
    pub fn level(&self) -> usize {
        self.level_indicies.len()
    }

    /// A count of all assignments on the trail.
    pub fn depth(&self) -> usize {
        self.literals.len()
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// Removes the top level, if it exists, returning the assignments made at the level.
    ///
    /// The assignments are removed as the returned iterator is dropped, and so no allocation is made.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any assignment.
    pub fn forget_top_level(&mut self) -> Option<std::vec::Drain<'_, CLiteral>> {
        let top_start = self.level_indicies.pop()?;
        Some(self.literals.drain(top_start..))
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn levels() {
        let mut trail = Trail::with_capacity(5);
        trail.store_assignment(-3);
        assert!(!trail.decision_is_made());

        trail.note_decision();
        trail.store_assignment(1);
        trail.store_assignment(2);
        trail.store_assignment(-4);

        trail.note_decision();
        trail.store_assignment(5);

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.depth(), 5);

        let forgotten = trail.forget_top_level().map(|drain| drain.collect::<Vec<_>>());
        assert_eq!(forgotten, Some(vec![5]));

        assert_eq!((trail.level(), trail.depth()), (1, 4));
        assert!(trail.decision_is_made());

        let forgotten = trail.forget_top_level().map(|drain| drain.collect::<Vec<_>>());
        assert_eq!(forgotten, Some(vec![1, 2, -4]));

        assert!(trail.forget_top_level().is_none());
        assert_eq!(trail.literals, vec![-3]);
    }
}
