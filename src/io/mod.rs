/*!
Sources of clauses.

A solver reads a formula from some [ClauseSource]:
- First, the [header](ClauseSource::read_header), once.
- Then, [clauses](ClauseSource::read_next_clause), until the source is exhausted.

Two sources are provided:
- [DimacsReader], which reads a formula in DIMACS form from bytes.
- [ClauseList], which reads a formula from clauses in memory.
*/

pub mod dimacs;
pub use dimacs::DimacsReader;

use crate::{structures::clause::CClause, types::err};

/// The counts declared by the header of a formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// A count of the atoms of the formula, each of which is an atom in `1..=literal_count`.
    pub literal_count: usize,

    /// A count of the clauses of the formula.
    pub clause_count: usize,
}

/// Something from which a formula may be read.
pub trait ClauseSource {
    /// Reads the header of the formula.
    ///
    /// To be called once, before any clause is read.
    fn read_header(&mut self) -> Result<Header, err::ParseError>;

    /// Reads the next clause of the formula, or `None` if every clause has been read.
    ///
    /// The clause does not include the `0` which terminates a clause in DIMACS.
    fn read_next_clause(&mut self) -> Result<Option<CClause>, err::ParseError>;
}

/// A formula, as a list of clauses in memory.
///
/// ```rust
/// # use trail_sat::io::{ClauseList, ClauseSource};
/// let mut source = ClauseList::new(2, vec![vec![1, 2], vec![-1]]);
///
/// assert_eq!(source.read_header().map(|header| header.clause_count), Ok(2));
/// assert_eq!(source.read_next_clause(), Ok(Some(vec![1, 2])));
/// assert_eq!(source.read_next_clause(), Ok(Some(vec![-1])));
/// assert_eq!(source.read_next_clause(), Ok(None));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClauseList {
    literal_count: usize,
    clauses: std::vec::IntoIter<CClause>,
}

impl ClauseList {
    /// A list of `clauses` over the atoms `1..=literal_count`.
    pub fn new(literal_count: usize, clauses: Vec<CClause>) -> Self {
        ClauseList {
            literal_count,
            clauses: clauses.into_iter(),
        }
    }
}

impl ClauseSource for ClauseList {
    fn read_header(&mut self) -> Result<Header, err::ParseError> {
        Ok(Header {
            literal_count: self.literal_count,
            clause_count: self.clauses.len(),
        })
    }

    fn read_next_clause(&mut self) -> Result<Option<CClause>, err::ParseError> {
        Ok(self.clauses.next())
    }
}
