//! Making and undoing assignments.

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use super::{GenericProblem, ProblemState};

impl<R: rand::Rng> GenericProblem<R> {
    /// Values `atom` with `value`, and records the assignment on the trail.
    ///
    /// If `is_decision` is set, the assignment begins a fresh decision level.
    ///
    /// Errors if `atom` is not an atom of the problem or if `atom` already has some value, and in either case the problem is unchanged.
    pub fn set_literal(
        &mut self,
        atom: Atom,
        value: bool,
        is_decision: bool,
    ) -> Result<(), err::ProblemError> {
        self.atom_db.set_value(atom, value)?;

        let literal = CLiteral::new(atom, value);
        if is_decision {
            log::trace!(target: targets::TRAIL, "Decision: {literal}");
            self.trail.note_decision();
        } else {
            log::trace!(target: targets::TRAIL, "Consequence: {literal}");
        }
        self.trail.store_assignment(literal);

        if self.state == ProblemState::Input {
            self.state = ProblemState::Solving;
        }

        Ok(())
    }

    /// Undoes the most recent decision, together with every assignment made after the decision.
    ///
    /// Records of satisfaction which depend on an undone assignment are invalidated.
    ///
    /// Errors if no decision has been made, and in this case the problem is unchanged.
    pub fn rollback(&mut self) -> Result<(), err::ProblemError> {
        let Some(forgotten) = self.trail.forget_top_level() else {
            return Err(err::ProblemError::NoDecision);
        };

        for literal in forgotten {
            self.atom_db.drop_value(literal.atom());
        }

        let depth = self.trail.depth();
        self.clause_db.invalidate_from(depth);

        log::trace!(target: targets::TRAIL, "Rollback to level {}, depth {depth}", self.trail.level());

        Ok(())
    }
}
