//! Error types used in the library.
//!
//! Errors fall into a handful of kinds:
//! - Format errors, from reading a DIMACS formula. A formula which fails to parse is never solved.
//! - Errors when building a problem, e.g. a literal mentioning an atom outside of the declared range.
//! - Usage errors, from a violated contract of the [problem](crate::problem) --- e.g. assigning an atom twice, or rolling back without a decision.
//!   These indicate a bug in whatever drives the problem, and a solve which encounters one is aborted.
//! - State errors, e.g. adding a clause after a solve has begun.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    Parse(ParseError),
    Problem(ProblemError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseDB(e) => write!(f, "Clause error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Problem(e) => write!(f, "Problem error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when adding a clause to a problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The literal `0` was found inside a clause.
    /// In DIMACS `0` terminates a clause, and so is never a literal.
    ZeroLiteral,

    /// A literal whose atom exceeds the literal count of the problem.
    AtomOutOfRange(Atom),

    /// Space for the given count of clauses could not be allocated.
    StorageExhausted(usize),
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
///
/// Each error which concerns a specific line notes the (1-indexed) line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended before a problem specification was found.
    MissingProblem(usize),

    /// Some line before the problem specification was neither a comment nor the problem specification.
    UnexpectedPreamble(usize),

    /// The problem specification was not of the form `p cnf <literals> <clauses>`.
    ProblemSpecification(usize),

    /// A digit was expected, but not found.
    ExpectedDigit(usize),

    /// A literal was not followed by a single space.
    ExpectedSpace(usize),

    /// A line did not end where it was expected to.
    ExpectedLineEnd(usize),

    /// A number too large to be represented.
    Overflow(usize),

    /// The input ended in the middle of a clause.
    UnexpectedEnd(usize),

    /// Reading from the underlying source failed.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProblem(l) => write!(f, "no problem specification found (line {l})"),
            Self::UnexpectedPreamble(l) => write!(f, "unexpected line before problem specification (line {l})"),
            Self::ProblemSpecification(l) => write!(f, "malformed problem specification (line {l})"),
            Self::ExpectedDigit(l) => write!(f, "expected a digit (line {l})"),
            Self::ExpectedSpace(l) => write!(f, "expected a single space after a literal (line {l})"),
            Self::ExpectedLineEnd(l) => write!(f, "expected the end of a line (line {l})"),
            Self::Overflow(l) => write!(f, "number too large (line {l})"),
            Self::UnexpectedEnd(l) => write!(f, "unexpected end of input (line {l})"),
            Self::Line(l) => write!(f, "failed to read (line {l})"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Violations of the contract of a problem.
///
/// These are never expected during a solve, and a solve which encounters one is aborted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProblemError {
    /// An attempt to assign a value to an atom which already has a value.
    AlreadyAssigned(Atom),

    /// An attempt to assign a value to an atom which is not part of the problem.
    UnknownAtom(Atom),

    /// A rollback was requested, though no decision has been made.
    NoDecision,

    /// An unassigned atom was requested, though every atom has a value.
    NoUnassignedAtom,

    /// A valuation claimed to satisfy the formula does not satisfy some clause.
    UnsatisfiedClause,
}

impl From<ProblemError> for ErrorKind {
    fn from(e: ProblemError) -> Self {
        ErrorKind::Problem(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The formula of a problem is fixed once a solve has begun.
    SolveInProgress,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
