use std::str::FromStr;

/// The form of a search, either of which explores the same space in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchForm {
    /// Search with an explicit stack of decisions.
    ///
    /// The depth of a search is bounded only by memory.
    Iterative = 0,

    /// Search by recursion, with a call for each decision.
    ///
    /// The depth of a search is bounded by the stack of the calling thread.
    Recursive,
}

impl SearchForm {
    /// The minimum SearchForm type.
    pub const MIN: SearchForm = SearchForm::Iterative;

    /// The maximum SearchForm type.
    pub const MAX: SearchForm = SearchForm::Recursive;
}

impl std::fmt::Display for SearchForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iterative => write!(f, "iterative"),
            Self::Recursive => write!(f, "recursive"),
        }
    }
}

impl FromStr for SearchForm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(Self::Iterative),

            "recursive" => Ok(Self::Recursive),

            _unkown_string => Err(()),
        }
    }
}
