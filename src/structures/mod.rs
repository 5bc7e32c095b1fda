//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//!  A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//!  The formula of a [problem](crate::problem) is stored in its [clause database](crate::db::clause), and is fixed once a solve begins.
//!
//! ## (Boolean) values
//!
//! Each atom of a formula has a value of true, false, or no value at all, as recorded in a [valuation].

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
