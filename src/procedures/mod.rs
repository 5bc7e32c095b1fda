//! Procedures on a [problem](crate::problem).
//!
//! - [simplify] extends the valuation of a problem by assignments forced by the formula.
//! - [search] determines the satisfiability of the formula of a problem, iteratively.
//! - [recursive] determines the satisfiability of the formula of a problem, recursively.

pub mod recursive;
pub mod search;
pub mod simplify;
