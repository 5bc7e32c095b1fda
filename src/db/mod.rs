//! Databases for holding information relevant to a solve.
//!
//! - [The atom database](crate::db::atom)
//!   + The current valuation.
//!   + A count of the occurrences of each atom in the formula.
//! - [The clause database](crate::db::clause)
//!   + The clauses of the formula, stored once and never mutated.
//!   + A cache of the clauses satisfied by the current valuation, if requested.
//! - [The trail](crate::db::trail)
//!   + The assignments made during a solve, grouped by decision level.

pub mod atom;
pub mod clause;
pub mod trail;
