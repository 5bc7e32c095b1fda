use trail_sat::{
    config::{Config, SolverKind},
    io::{ClauseSource, DimacsReader},
    reports::Report,
    solvers::solver_from_config,
    types::err::{ClauseDBError, ErrorKind, ParseError},
};

fn load(dimacs: &[u8]) -> Result<Report, ErrorKind> {
    let mut solver = solver_from_config(Config::default());
    solver.load(&mut DimacsReader::new(dimacs))?;
    solver.solve().map(|response| response.outcome)
}

#[test]
fn comments_and_trailer() {
    let dimacs = b"c A formula
c
p cnf 3 3
1 -2 0
c between clauses
2 3 0
-1 -3 0
%
0

";
    assert_eq!(load(dimacs), Ok(Report::Satisfied));
}

#[test]
fn crlf() {
    let dimacs = b"c A formula\r\np cnf 2 2\r\n1 2 0\r\n-1 0\r\n";
    assert_eq!(load(dimacs), Ok(Report::Satisfied));
}

#[test]
fn no_final_line_break() {
    let dimacs = b"p cnf 1 2\n1 0\n-1 0";
    assert_eq!(load(dimacs), Ok(Report::Unsatisfied));
}

#[test]
fn header_only() {
    let mut reader = DimacsReader::new(b"c nothing more\np cnf 12 40\n1 2 0\n".as_slice());
    let header = reader.read_header().unwrap();
    assert_eq!((header.literal_count, header.clause_count), (12, 40));
}

#[test]
fn errors() {
    assert_eq!(load(b""), Err(ErrorKind::Parse(ParseError::MissingProblem(0))));

    assert_eq!(
        load(b"c\n1 2 0\n"),
        Err(ErrorKind::Parse(ParseError::UnexpectedPreamble(2)))
    );

    assert_eq!(
        load(b"p cnf  2 1\n1 2 0\n"),
        Err(ErrorKind::Parse(ParseError::ExpectedDigit(1)))
    );

    assert_eq!(
        load(b"p cnf 2 2\n1 2 0\n1  2 0\n"),
        Err(ErrorKind::Parse(ParseError::ExpectedDigit(3)))
    );

    assert_eq!(
        load(b"p cnf 2 1\n1 2\n"),
        Err(ErrorKind::Parse(ParseError::ExpectedSpace(2)))
    );

    assert_eq!(
        load(b"p cnf 2 1\n1 2 0 \n"),
        Err(ErrorKind::Parse(ParseError::ExpectedLineEnd(2)))
    );

    assert_eq!(
        load(b"p cnf 2 1\n1 3000000000 0\n"),
        Err(ErrorKind::Parse(ParseError::Overflow(2)))
    );
}

#[test]
fn oversized_header() {
    for kind in SolverKind::ALL {
        let mut solver = solver_from_config(Config::for_solver(kind));
        let dimacs = b"p cnf 2 18446744073709551615\n1 2 0\n";

        assert_eq!(
            solver.load(&mut DimacsReader::new(dimacs.as_slice())).map(|_| ()),
            Err(ErrorKind::ClauseDB(ClauseDBError::StorageExhausted(usize::MAX))),
            "{kind}"
        );
    }

    assert_eq!(
        load(b"p cnf 2147483648 1\n1 0\n"),
        Err(ErrorKind::Parse(ParseError::Overflow(1)))
    );
}
