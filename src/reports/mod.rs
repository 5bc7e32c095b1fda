/*!
Reports on a solve.
*/

use crate::problem::ProblemState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfied by the valuation found.
    Satisfied,

    /// The formula is unsatisfiable.
    Unsatisfied,

    /// Satisfiability of the formula is unknown, for some reason.
    ///
    /// For example, a time limit was reached, or a terminate callback requested the solve end.
    Unknown,
}

impl From<&ProblemState> for Report {
    fn from(value: &ProblemState) -> Self {
        match value {
            ProblemState::Input | ProblemState::Solving => Self::Unknown,
            ProblemState::Satisfiable => Self::Satisfied,
            ProblemState::Unsatisfiable => Self::Unsatisfied,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfied => write!(f, "Satisfied"),
            Self::Unsatisfied => write!(f, "Unsatisfied"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Report {
    /// The status line of the report, as used in the output of SAT competitions.
    pub fn competition_status(&self) -> &'static str {
        match self {
            Self::Satisfied => "SATISFIABLE",
            Self::Unsatisfied => "UNSATISFIABLE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// The response to a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveResponse {
    /// The outcome of the solve.
    pub outcome: Report,

    /// If the formula was satisfied, a value for each atom with the value of atom *a* at index *a*.
    ///
    /// Any atom left without a value by the solve is valued `false`, as is the (ignored) index zero.
    pub assignment: Option<Vec<bool>>,
}

impl SolveResponse {
    /// A response with no assignment.
    pub fn without_assignment(outcome: Report) -> Self {
        SolveResponse {
            outcome,
            assignment: None,
        }
    }

    /// The assignment as a DIMACS style string of literals, terminated by `0`.
    pub fn model_string(&self) -> Option<String> {
        let assignment = self.assignment.as_ref()?;
        let mut model = String::default();
        for (atom, value) in assignment.iter().enumerate().skip(1) {
            match value {
                true => model.push_str(&format!("{atom} ")),
                false => model.push_str(&format!("-{atom} ")),
            }
        }
        model.push('0');
        Some(model)
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn model_string() {
        let response = SolveResponse {
            outcome: Report::Satisfied,
            assignment: Some(vec![false, true, false, true]),
        };
        assert_eq!(response.model_string(), Some("1 -2 3 0".to_string()));

        let response = SolveResponse::without_assignment(Report::Unsatisfied);
        assert_eq!(response.model_string(), None);
    }
}
