use std::str::FromStr;

/// Variant heuristics for choosing an unassigned atom to make a decision on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Heuristic {
    /// Choose uniformly at random from the unassigned atoms, with positive polarity.
    Random = 0,

    /// Choose the unassigned atom and polarity with the most occurrences in the formula.
    ///
    /// Occurrences are counted once, as clauses are added, and so reflect the formula as given rather than the formula as simplified by a valuation.
    /// On a tie between polarities, positive polarity is preferred.
    Greedy,

    /// Choose the unassigned atom with the smallest index, with positive polarity.
    First,
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Greedy => write!(f, "greedy"),
            Self::First => write!(f, "first"),
        }
    }
}

impl Heuristic {
    /// The minimum Heuristic type.
    pub const MIN: Heuristic = Heuristic::Random;

    /// The maximum Heuristic type.
    pub const MAX: Heuristic = Heuristic::First;
}

impl FromStr for Heuristic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),

            "greedy" => Ok(Self::Greedy),

            "first" => Ok(Self::First),

            _unkown_string => Err(()),
        }
    }
}
