/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- The current (often partial) [valuation](Valuation), with the sentinel atom valued at index zero.
- A count of the occurrences of each atom in the formula, by polarity, for use when choosing a decision.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, SENTINEL_ATOM},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// A count of the clauses an atom occurs in, by polarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occurrences {
    pub positive: usize,
    pub negative: usize,
}

impl Occurrences {
    /// The polarity the atom occurs with most often, with positive polarity on a tie.
    pub fn leaning(&self) -> bool {
        self.positive >= self.negative
    }

    /// The count of clauses containing the atom with the polarity it occurs with most often.
    pub fn most(&self) -> usize {
        std::cmp::max(self.positive, self.negative)
    }
}

/// The atom database.
pub struct AtomDB {
    /// The current valuation.
    valuation: CValuation,

    /// Occurrences of each atom in the formula, indexed by atom.
    occurrences: Vec<Occurrences>,
}

impl AtomDB {
    /// A new [AtomDB] for the atoms `1..=atom_count`, with no atom valued.
    pub fn new(atom_count: usize) -> Self {
        let mut valuation = vec![None; atom_count + 1];
        valuation[SENTINEL_ATOM as usize] = Some(true);

        AtomDB {
            valuation,
            occurrences: vec![Occurrences::default(); atom_count + 1],
        }
    }

    /// A count of atoms in the [AtomDB], excluding the sentinel.
    pub fn count(&self) -> usize {
        self.valuation.atom_count()
    }

    /// Whether `atom` is an atom of the [AtomDB].
    pub fn contains(&self, atom: Atom) -> bool {
        atom != SENTINEL_ATOM && (atom as usize) < self.valuation.len()
    }

    /// The current valuation, as the canonical [CValuation].
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// The value of `atom`, if `atom` has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// Values `atom` with `value`.
    ///
    /// Errors if `atom` is not part of the database, or if `atom` already has some value.
    pub fn set_value(&mut self, atom: Atom, value: bool) -> Result<(), err::ProblemError> {
        if !self.contains(atom) {
            return Err(err::ProblemError::UnknownAtom(atom));
        }

        match &mut self.valuation[atom as usize] {
            Some(_) => Err(err::ProblemError::AlreadyAssigned(atom)),
            empty => {
                *empty = Some(value);
                Ok(())
            }
        }
    }

    /// Clears the value of an atom.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::TRAIL, "Cleared atom: {atom}");
        if let Some(value) = self.valuation.get_mut(atom as usize) {
            *value = None;
        }
    }

    /// Notes an occurrence of `literal` in some clause.
    pub fn note_occurrence(&mut self, literal: CLiteral) {
        if let Some(occurrences) = self.occurrences.get_mut(literal.atom() as usize) {
            match literal.polarity() {
                true => occurrences.positive += 1,
                false => occurrences.negative += 1,
            }
        }
    }

    /// The occurrences of `atom` in the formula.
    pub fn occurrences(&self, atom: Atom) -> Occurrences {
        self.occurrences
            .get(atom as usize)
            .copied()
            .unwrap_or_default()
    }
}
