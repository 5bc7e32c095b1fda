//! A solver which copies the formula, reduced by each assignment.
//!
//! On each assignment a fresh formula is built from the current formula, by:
//! - Dropping each clause containing the assigned literal, as these clauses are satisfied.
//! - Removing the negation of the assigned literal from each other clause, as the negation is false.
//!
//! And so, on the reduced formula:
//! - A unit clause is a clause of length one.
//! - A literal is pure if the negation of the literal does not occur.
//! - The formula is satisfied if no clause remains, and in conflict if some clause is empty.
//!
//! Decisions are made on the atom of the first literal of the first clause, first with positive polarity.
//!
//! The solver is simple, and slow, and so of use as a reference for other solvers.

use crate::{
    config::Config,
    io::ClauseSource,
    misc::log::targets::{self},
    problem::preprocess::{check_literals, preprocess_clause, PreprocessingOk},
    reports::{Report, SolveResponse},
    structures::{
        atom::SENTINEL_ATOM,
        clause::CClause,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
    types::err::{self, ErrorKind},
};

use super::{
    callbacks::{CallbackProgress, CallbackTerminate},
    Counters, LoadInfo, Monitor, SatSolver,
};

pub struct SimpleSolver {
    config: Config,

    literal_count: usize,

    clauses: Vec<CClause>,

    monitor: Monitor,
}

/// The outcome of a search on a reduced formula.
enum Outcome {
    Satisfied(CValuation),
    Unsatisfied,
    Unknown,
}

/// The formula, reduced by the assignment of `literal`.
fn reduce(formula: &[CClause], literal: CLiteral) -> Vec<CClause> {
    let negation = literal.negate();
    formula
        .iter()
        .filter(|clause| !clause.contains(&literal))
        .map(|clause| {
            clause
                .iter()
                .copied()
                .filter(|other| *other != negation)
                .collect()
        })
        .collect()
}

/// The pure literals of the formula, in order of atom.
fn pure_literals(formula: &[CClause], atom_count: usize) -> Vec<CLiteral> {
    let mut seen = vec![(false, false); atom_count + 1];
    for literal in formula.iter().flatten() {
        let flags = &mut seen[literal.atom() as usize];
        match literal.polarity() {
            true => flags.0 = true,
            false => flags.1 = true,
        }
    }

    seen.iter()
        .enumerate()
        .filter_map(|(atom, flags)| match flags {
            (true, false) => Some(CLiteral::new(atom as _, true)),
            (false, true) => Some(CLiteral::new(atom as _, false)),
            _ => None,
        })
        .collect()
}

fn search(mut formula: Vec<CClause>, mut valuation: CValuation, monitor: &mut Monitor) -> Outcome {
    if monitor.call() {
        return Outcome::Unknown;
    }

    let atom_count = valuation.len() - 1;

    loop {
        if formula.iter().any(|clause| clause.is_empty()) {
            return Outcome::Unsatisfied;
        }

        if let Some(literal) = formula.iter().find(|clause| clause.len() == 1).map(|clause| clause[0]) {
            log::trace!(target: targets::PROPAGATION, "Unit: {literal}");
            valuation[literal.atom() as usize] = Some(literal.polarity());
            formula = reduce(&formula, literal);
            continue;
        }

        let pure = pure_literals(&formula, atom_count);
        if pure.is_empty() {
            break;
        }
        for literal in pure {
            log::trace!(target: targets::PURE, "Pure: {literal}");
            valuation[literal.atom() as usize] = Some(literal.polarity());
            formula = reduce(&formula, literal);
        }
    }

    let Some(&first) = formula.first().and_then(|clause| clause.first()) else {
        return Outcome::Satisfied(valuation);
    };

    monitor.counters.decisions += 1;
    for polarity in [true, false] {
        let decision = CLiteral::new(first.atom(), polarity);
        log::debug!(target: targets::SEARCH, "Decision {decision}");

        let mut branch_valuation = valuation.clone();
        branch_valuation[decision.atom() as usize] = Some(polarity);

        match search(reduce(&formula, decision), branch_valuation, monitor) {
            Outcome::Unsatisfied => monitor.counters.backtracks += 1,
            other => return other,
        }
    }

    Outcome::Unsatisfied
}

impl SimpleSolver {
    /// A solver for the empty formula, configured by `config`.
    pub fn from_config(config: Config) -> Self {
        SimpleSolver {
            literal_count: 0,
            clauses: Vec::default(),
            monitor: Monitor::new(&config),
            config,
        }
    }
}

impl SatSolver for SimpleSolver {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn load(&mut self, source: &mut dyn ClauseSource) -> Result<LoadInfo, ErrorKind> {
        let header = source.read_header()?;
        let mut clauses: Vec<CClause> = Vec::default();
        clauses
            .try_reserve(header.clause_count)
            .map_err(|_| err::ClauseDBError::StorageExhausted(header.clause_count))?;

        let mut info = LoadInfo {
            header,
            ..LoadInfo::default()
        };

        while let Some(mut clause) = source.read_next_clause()? {
            info.read_clauses += 1;
            check_literals(&clause, header.literal_count)?;

            match preprocess_clause(&mut clause, self.config.sort_clauses.value) {
                PreprocessingOk::Tautology => info.tautologies += 1,
                PreprocessingOk::Clause => clauses.push(clause),
            }
        }

        info.note_mismatch();
        log::info!(target: targets::PROBLEM, "Loaded {} clauses over {} atoms", clauses.len(), header.literal_count);

        self.literal_count = header.literal_count;
        self.clauses = clauses;
        Ok(info)
    }

    fn solve(&mut self) -> Result<SolveResponse, ErrorKind> {
        let mut valuation: CValuation = vec![None; self.literal_count + 1];
        valuation[SENTINEL_ATOM as usize] = Some(true);

        self.monitor.begin();
        let outcome = search(self.clauses.clone(), valuation, &mut self.monitor);
        self.monitor.finish();

        let response = match outcome {
            Outcome::Satisfied(valuation) => {
                let mut assignment: Vec<bool> = valuation.iter().map(|value| value.unwrap_or(false)).collect();
                assignment[SENTINEL_ATOM as usize] = false;

                SolveResponse {
                    outcome: Report::Satisfied,
                    assignment: Some(assignment),
                }
            }
            Outcome::Unsatisfied => SolveResponse::without_assignment(Report::Unsatisfied),
            Outcome::Unknown => SolveResponse::without_assignment(Report::Unknown),
        };

        log::info!(target: targets::SEARCH, "{} after {} calls", response.outcome, self.monitor.counters.calls);
        Ok(response)
    }

    fn counters(&self) -> &Counters {
        &self.monitor.counters
    }

    fn literal_count(&self) -> usize {
        self.literal_count
    }

    fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.monitor.set_callback_terminate(callback);
    }

    fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.monitor.set_callback_progress(callback);
    }
}

#[cfg(test)]
mod simple_tests {
    use super::*;

    #[test]
    fn reduction() {
        let formula = vec![vec![1, 2], vec![-1, 3], vec![-1], vec![2, 3]];
        assert_eq!(reduce(&formula, 1), vec![vec![3], vec![], vec![2, 3]]);
        assert_eq!(reduce(&formula, -1), vec![vec![2], vec![2, 3]]);
    }

    #[test]
    fn pure() {
        let formula = vec![vec![1, -2], vec![2, 3], vec![-1, -3]];
        assert!(pure_literals(&formula, 3).is_empty());

        let reduced = reduce(&formula, 1);
        assert_eq!(pure_literals(&reduced, 3), vec![2]);
    }

    #[test]
    fn empty_clause() {
        let mut solver = SimpleSolver::from_config(Config::default());
        let mut source = crate::io::ClauseList::new(2, vec![vec![1, 2], vec![]]);
        assert!(solver.load(&mut source).is_ok());

        assert_eq!(
            solver.solve().map(|response| response.outcome),
            Ok(Report::Unsatisfied)
        );
    }
}
