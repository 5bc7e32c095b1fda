//! Preprocessing of a clause before the clause is stored.
//!
//! Preprocessing is applied once, to each clause as it is added, and is never revisited during a solve.

use crate::{
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Primarily to distinguish the case where preprocessing results in a tautology.
#[derive(Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology, which should be discarded.
    Tautology,

    /// Any clause, including the empty clause.
    Clause,
}

/// Ensures each literal of `clause` is a literal over the atoms `1..=atom_count`.
pub fn check_literals(clause: &[CLiteral], atom_count: usize) -> Result<(), err::ClauseDBError> {
    for literal in clause {
        if *literal == 0 {
            return Err(err::ClauseDBError::ZeroLiteral);
        }

        let atom: Atom = literal.atom();
        if (atom as usize) > atom_count {
            return Err(err::ClauseDBError::AtomOutOfRange(atom));
        }
    }
    Ok(())
}

/// Preprocess a clause to remove duplicate literals, and to identify tautologies.
///
/// The first occurrence of each literal is kept, and so the order of literals is otherwise unchanged.
/// If `sort` is set, the literals of the clause are then ordered by atom.
pub fn preprocess_clause(clause: &mut CClause, sort: bool) -> PreprocessingOk {
    let mut index = 0;
    while index < clause.len() {
        let literal = clause[index];

        let earlier = clause[..index]
            .iter()
            .find(|other_literal| other_literal.atom() == literal.atom());

        match earlier {
            None => index += 1,

            Some(&other_literal) if other_literal == literal => {
                clause.remove(index);
            }

            Some(_) => return PreprocessingOk::Tautology,
        }
    }

    if sort {
        clause.sort_unstable_by_key(|literal| literal.atom());
    }

    PreprocessingOk::Clause
}
