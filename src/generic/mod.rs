//! Generic structures, independent of any particular problem.

pub mod random;
