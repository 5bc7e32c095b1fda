/*!
A database of clauses, together with a cache of which clauses are satisfied by the current valuation.

Clauses are stored once, and are never mutated after being stored.
Instead, whether a clause is satisfied, in conflict, or asserts some literal is derived from the valuation when the clause is examined.

# The satisfaction cache

Once most clauses of a formula are satisfied, scanning every clause on each query is mostly wasted effort.
So, optionally, the first time a clause is found to be satisfied the index of the latest assignment on the [trail](crate::db::trail) is recorded alongside the clause, and the clause is skipped by later scans.

A record of index *i* is valid so long as the assignment at index *i* of the trail (and so every assignment before) is in place, as some assignment among these satisfies the clause.
When the trail is cut to depth *d*, the assignments at index *d* and above are undone, and so every record at or above *d* is invalidated.

Records are pushed to a stack in the order they are made.
As the depth of the trail only decreases on a rollback, records on the stack are ordered by index, and invalidation pops records from the top of the stack until a record below the cut is found.
*/

use std::collections::TryReserveError;

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseStatus},
        literal::CLiteral,
        valuation::Valuation,
    },
    types::err::{self},
};

/// The clause database.
pub struct ClauseDB {
    /// The clauses of the formula, indexed by order of addition.
    clauses: Vec<CClause>,

    /// For each clause, the index of the latest assignment on the trail when the clause was found to be satisfied, if the clause is known to be satisfied.
    satisfied_at: Vec<Option<usize>>,

    /// Indicies of clauses with some record in `satisfied_at`, in order of recording.
    cached: Vec<usize>,

    /// Whether satisfaction is cached.
    caching: bool,

    /// Whether the empty clause has been added.
    contains_empty: bool,
}

impl ClauseDB {
    /// An empty clause database.
    pub fn new(caching: bool) -> Self {
        ClauseDB {
            clauses: Vec::default(),
            satisfied_at: Vec::default(),
            cached: Vec::default(),
            caching,
            contains_empty: false,
        }
    }

    /// Reserves space for at least `additional` further clauses.
    ///
    /// Errors, rather than panicking, if the space cannot be allocated.
    pub fn reserve(&mut self, additional: usize) -> Result<(), err::ClauseDBError> {
        let exhausted = |_: TryReserveError| err::ClauseDBError::StorageExhausted(additional);

        self.clauses.try_reserve(additional).map_err(exhausted)?;
        if self.caching {
            self.satisfied_at.try_reserve(additional).map_err(exhausted)?;
            self.cached.try_reserve(additional).map_err(exhausted)?;
        }
        Ok(())
    }

    /// Stores a clause, returning the index of the clause.
    pub fn store(&mut self, clause: CClause) -> usize {
        if clause.is_empty() {
            self.contains_empty = true;
        }

        let index = self.clauses.len();
        self.clauses.push(clause);
        if self.caching {
            self.satisfied_at.push(None);
        }
        index
    }

    /// A count of the clauses in the database.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the empty clause is part of the database.
    pub fn contains_empty(&self) -> bool {
        self.contains_empty
    }

    /// An iterator over all clauses in the database.
    pub fn all_clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// Whether the clause at `index` is known to be satisfied.
    pub fn is_cached(&self, index: usize) -> bool {
        matches!(self.satisfied_at.get(index), Some(Some(_)))
    }

    /// The count of clauses known to be satisfied.
    pub fn cache_size(&self) -> usize {
        self.cached.len()
    }

    /// The clause at `index` together with the status of the clause on `valuation`.
    ///
    /// Returns `None` if the clause is known to be satisfied, or if there is no clause at `index`.
    ///
    /// If satisfaction is cached and the clause is satisfied, records that the clause is satisfied by the assignments of the trail up to (and including) the assignment at `trail_index`.
    pub fn unsettled(
        &mut self,
        index: usize,
        valuation: &impl Valuation,
        trail_index: usize,
    ) -> Option<(&[CLiteral], ClauseStatus)> {
        if self.is_cached(index) {
            return None;
        }

        let clause = self.clauses.get(index)?;
        let status = clause.status_on(valuation);

        if status == ClauseStatus::Satisfied {
            if let Some(record @ None) = self.satisfied_at.get_mut(index) {
                *record = Some(trail_index);
                self.cached.push(index);
            }
        }

        Some((clause.as_slice(), status))
    }

    /// Invalidates every record at or above `depth`.
    pub fn invalidate_from(&mut self, depth: usize) {
        let mut invalidated = 0;
        while let Some(&index) = self.cached.last() {
            match self.satisfied_at[index] {
                Some(level) if level >= depth => {
                    self.satisfied_at[index] = None;
                    self.cached.pop();
                    invalidated += 1;
                }
                _ => break,
            }
        }

        if invalidated > 0 {
            log::trace!(target: targets::CACHE, "Invalidated {invalidated} records from depth {depth}");
        }
    }

    /// The formula as a string of DIMACS clauses.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = String::default();
        for clause in &self.clauses {
            dimacs.push_str(&clause.as_dimacs(true));
            dimacs.push('\n');
        }
        dimacs
    }
}
