use std::str::FromStr;

/// The solvers available, each a distinct implementation of [SatSolver](crate::solvers::SatSolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SolverKind {
    /// A solver which copies the formula, reduced by each assignment.
    ///
    /// Simple, and slow, and so useful as a reference for the other solvers.
    Simple = 0,

    /// A solver which keeps a single copy of the formula, and records assignments on a trail.
    NoCopy,

    /// As [NoCopy](SolverKind::NoCopy), with a cache of the clauses satisfied by the valuation.
    Cached,
}

impl SolverKind {
    /// The minimum SolverKind type.
    pub const MIN: SolverKind = SolverKind::Simple;

    /// The maximum SolverKind type.
    pub const MAX: SolverKind = SolverKind::Cached;

    /// Every solver, in order.
    pub const ALL: [SolverKind; 3] = [SolverKind::Simple, SolverKind::NoCopy, SolverKind::Cached];
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::NoCopy => write!(f, "no-copy"),
            Self::Cached => write!(f, "cached"),
        }
    }
}

impl FromStr for SolverKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),

            "no-copy" => Ok(Self::NoCopy),

            "cached" => Ok(Self::Cached),

            _unkown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod solver_kind_tests {
    use super::*;

    #[test]
    fn names() {
        for kind in SolverKind::ALL {
            assert_eq!(SolverKind::from_str(&kind.to_string()), Ok(kind));
        }
        assert!(SolverKind::from_str("nocopy").is_err());
    }
}
