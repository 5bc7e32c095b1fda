/*!
A strict reader of formulas in DIMACS form.

The reader accepts:
- Zero or more comment lines, each beginning with `c`.
- A problem line, exactly of the form `p cnf <literals> <clauses>` with single spaces between each part.
- Clauses, one to a line, where each literal is followed by exactly one space, and the `0` which terminates the clause is followed by the end of the line.

Comment lines are also skipped between clauses, and a line beginning with `%` (as found in the SATLIB library of formulas) ends the formula.
Any line may end with `\r\n` in place of `\n`, and the last line of the input may omit the line ending.

Anything else is an error, noting the line at which the error was found.
In particular, whitespace other than single spaces between literals is an error.

```rust
# use trail_sat::io::{ClauseSource, DimacsReader};
let dimacs = b"c An example
p cnf 3 2
1 -2 0
-1 3 0
";
let mut reader = DimacsReader::new(dimacs.as_slice());

let header = reader.read_header().unwrap();
assert_eq!((header.literal_count, header.clause_count), (3, 2));

assert_eq!(reader.read_next_clause(), Ok(Some(vec![1, -2])));
assert_eq!(reader.read_next_clause(), Ok(Some(vec![-1, 3])));
assert_eq!(reader.read_next_clause(), Ok(None));
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, IntLiteral},
    },
    types::err::{self},
};

use super::{ClauseSource, Header};

/// A reader of DIMACS formulas from some buffered source of bytes.
pub struct DimacsReader<R: BufRead> {
    reader: R,

    /// The current line.
    line: Vec<u8>,

    /// A count of the lines read, and so the (1-indexed) number of the current line.
    line_counter: usize,

    /// Whether the formula has ended, by the end of input or by a `%` line.
    finished: bool,
}

/// A cursor over the bytes of a line.
struct Cursor<'l> {
    bytes: &'l [u8],
    position: usize,
    line: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn expect(&mut self, byte: u8, error: err::ParseError) -> Result<(), err::ParseError> {
        match self.peek() {
            Some(found) if found == byte => {
                self.position += 1;
                Ok(())
            }
            _ => Err(error),
        }
    }

    /// Reads a sequence of digits as a number, with at least one digit required.
    fn read_natural(&mut self) -> Result<u64, err::ParseError> {
        let mut value: u64 = 0;
        let mut digits = 0;

        while let Some(byte @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|value| value.checked_add((byte - b'0') as u64))
                .ok_or(err::ParseError::Overflow(self.line))?;
            self.position += 1;
            digits += 1;
        }

        match digits {
            0 => Err(err::ParseError::ExpectedDigit(self.line)),
            _ => Ok(value),
        }
    }

    /// Reads an integer, with a leading `-` for a negative integer.
    fn read_literal(&mut self) -> Result<CLiteral, err::ParseError> {
        let negative = self.peek() == Some(b'-');
        if negative {
            self.position += 1;
        }

        let magnitude = self.read_natural()?;
        let magnitude = i64::try_from(magnitude).map_err(|_| err::ParseError::Overflow(self.line))?;
        let value = match negative {
            true => -magnitude,
            false => magnitude,
        };

        CLiteral::try_from(value).map_err(|_| err::ParseError::Overflow(self.line))
    }

    /// Ensures the line ends at the cursor, with an optional `\r` before the `\n`.
    fn expect_line_end(&mut self) -> Result<(), err::ParseError> {
        if self.peek() == Some(b'\r') {
            self.position += 1;
        }

        match self.peek() {
            // The last line of the input may not end with a line break.
            None => Ok(()),
            Some(b'\n') if self.position + 1 == self.bytes.len() => Ok(()),
            _ => Err(err::ParseError::ExpectedLineEnd(self.line)),
        }
    }
}

impl<R: BufRead> DimacsReader<R> {
    pub fn new(reader: R) -> Self {
        DimacsReader {
            reader,
            line: Vec::with_capacity(1024),
            line_counter: 0,
            finished: false,
        }
    }

    /// Reads the next line to the line buffer, returning false at the end of input.
    fn next_line(&mut self) -> Result<bool, err::ParseError> {
        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Ok(0) => Ok(false),
            Ok(_) => {
                self.line_counter += 1;
                Ok(true)
            }
            Err(_) => Err(err::ParseError::Line(self.line_counter + 1)),
        }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor {
            bytes: &self.line,
            position: 0,
            line: self.line_counter,
        }
    }
}

impl<R: BufRead> ClauseSource for DimacsReader<R> {
    fn read_header(&mut self) -> Result<Header, err::ParseError> {
        loop {
            if !self.next_line()? {
                return Err(err::ParseError::MissingProblem(self.line_counter));
            }

            match self.line.first() {
                Some(b'c') => continue,
                Some(b'p') => break,
                _ => return Err(err::ParseError::UnexpectedPreamble(self.line_counter)),
            }
        }

        let mut cursor = self.cursor();
        let specification_error = err::ParseError::ProblemSpecification(cursor.line);

        for &byte in b"p cnf " {
            cursor.expect(byte, specification_error.clone())?;
        }

        let literal_count = cursor.read_natural()?;
        cursor.expect(b' ', specification_error)?;
        let clause_count = cursor.read_natural()?;
        cursor.expect_line_end()?;

        // Every atom must be representable as a literal.
        let overflow = err::ParseError::Overflow(cursor.line);
        if literal_count > IntLiteral::MAX as u64 {
            return Err(overflow);
        }

        let header = Header {
            literal_count: usize::try_from(literal_count).map_err(|_| overflow.clone())?,
            clause_count: usize::try_from(clause_count).map_err(|_| overflow)?,
        };

        log::info!(target: targets::PARSER, "Header: {} literals, {} clauses", header.literal_count, header.clause_count);

        Ok(header)
    }

    fn read_next_clause(&mut self) -> Result<Option<CClause>, err::ParseError> {
        loop {
            if self.finished {
                return Ok(None);
            }

            if !self.next_line()? {
                self.finished = true;
                return Ok(None);
            }

            match self.line.first() {
                Some(b'c') => continue,

                Some(b'%') => {
                    log::trace!(target: targets::PARSER, "Formula ended by '%' at line {}", self.line_counter);
                    self.finished = true;
                    return Ok(None);
                }

                _ => break,
            }
        }

        let mut cursor = self.cursor();
        let mut clause = CClause::default();

        loop {
            let literal = cursor.read_literal()?;
            match literal {
                0 => {
                    cursor.expect_line_end()?;
                    return Ok(Some(clause));
                }
                _ => {
                    if cursor.peek().is_none() {
                        return Err(err::ParseError::UnexpectedEnd(cursor.line));
                    }
                    cursor.expect(b' ', err::ParseError::ExpectedSpace(cursor.line))?;
                    clause.push(literal);
                }
            }
        }
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;

    fn clauses_of(dimacs: &[u8]) -> Result<Vec<CClause>, err::ParseError> {
        let mut reader = DimacsReader::new(dimacs);
        reader.read_header()?;
        let mut clauses = Vec::default();
        while let Some(clause) = reader.read_next_clause()? {
            clauses.push(clause);
        }
        Ok(clauses)
    }

    #[test]
    fn header_after_comments() {
        let mut reader = DimacsReader::new(b"c one\nc two\np cnf 12 34\r\n".as_slice());
        assert_eq!(
            reader.read_header(),
            Ok(Header {
                literal_count: 12,
                clause_count: 34
            })
        );
        assert_eq!(reader.read_next_clause(), Ok(None));
    }

    #[test]
    fn header_errors() {
        let header_of = |dimacs: &[u8]| DimacsReader::new(dimacs).read_header();

        assert_eq!(header_of(b"c only a comment\n"), Err(err::ParseError::MissingProblem(1)));
        assert_eq!(header_of(b"1 2 0\n"), Err(err::ParseError::UnexpectedPreamble(1)));
        assert_eq!(header_of(b"p  cnf 1 2\n"), Err(err::ParseError::ProblemSpecification(1)));
        assert_eq!(header_of(b"c\np dnf 1 2\n"), Err(err::ParseError::ProblemSpecification(2)));
        assert_eq!(header_of(b"p cnf 1  2\n"), Err(err::ParseError::ExpectedDigit(1)));
        assert_eq!(header_of(b"p cnf 1 2 \n"), Err(err::ParseError::ExpectedLineEnd(1)));
        assert_eq!(header_of(b"p cnf -1 2\n"), Err(err::ParseError::ExpectedDigit(1)));
    }

    #[test]
    fn header_bounds() {
        let header_of = |dimacs: &[u8]| DimacsReader::new(dimacs).read_header();

        let widest = header_of(b"p cnf 2147483647 18446744073709551615\n");
        assert_eq!(widest.map(|header| header.literal_count), Ok(2147483647));

        assert_eq!(header_of(b"p cnf 2147483648 0\n"), Err(err::ParseError::Overflow(1)));
        assert_eq!(header_of(b"c\np cnf 1 18446744073709551616\n"), Err(err::ParseError::Overflow(2)));
    }

    #[test]
    fn clauses() {
        let dimacs = b"p cnf 3 3\n1 -2 0\r\nc a comment between clauses\n-3 0\n0\n";
        assert_eq!(clauses_of(dimacs), Ok(vec![vec![1, -2], vec![-3], vec![]]));
    }

    #[test]
    fn satlib_trailer() {
        let dimacs = b"p cnf 2 1\n1 2 0\n%\n0\n\n";
        assert_eq!(clauses_of(dimacs), Ok(vec![vec![1, 2]]));
    }

    #[test]
    fn no_final_line_break() {
        let dimacs = b"p cnf 2 1\n1 2 0";
        assert_eq!(clauses_of(dimacs), Ok(vec![vec![1, 2]]));
    }

    #[test]
    fn clause_errors() {
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1  2 0\n"),
            Err(err::ParseError::ExpectedDigit(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n 1 2 0\n"),
            Err(err::ParseError::ExpectedDigit(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1\t2 0\n"),
            Err(err::ParseError::ExpectedSpace(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 2\n1 2 0\n1 2\n"),
            Err(err::ParseError::ExpectedSpace(3))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1 2 0 \n"),
            Err(err::ParseError::ExpectedLineEnd(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1 2"),
            Err(err::ParseError::UnexpectedEnd(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1 x 0\n"),
            Err(err::ParseError::ExpectedDigit(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1 2147483648 0\n"),
            Err(err::ParseError::Overflow(2))
        );
        assert_eq!(
            clauses_of(b"p cnf 2 1\n1 2 0\n\n"),
            Err(err::ParseError::ExpectedDigit(3))
        );
    }
}
