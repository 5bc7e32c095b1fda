//! A solver which keeps a single copy of the formula, and records assignments on a trail.
//!
//! The formula is held in a [Problem], and the search is [the search of the library](crate::procedures::search).

use crate::{
    config::Config,
    io::ClauseSource,
    misc::log::targets::{self},
    problem::{ClauseOk, Problem},
    procedures::search,
    reports::{Report, SolveResponse},
    types::err::ErrorKind,
};

use super::{
    callbacks::{CallbackProgress, CallbackTerminate},
    Counters, LoadInfo, Monitor, SatSolver,
};

pub struct TrailSolver {
    config: Config,

    problem: Problem,

    monitor: Monitor,
}

impl TrailSolver {
    /// A solver for the empty formula, configured by `config`.
    pub fn from_config(config: Config) -> Self {
        TrailSolver {
            problem: Problem::new(0, config.clone()),
            monitor: Monitor::new(&config),
            config,
        }
    }

    /// The problem of the solver, with the valuation of the most recent solve.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

impl SatSolver for TrailSolver {
    fn name(&self) -> &'static str {
        match self.config.caches_satisfaction() {
            true => "cached",
            false => "no-copy",
        }
    }

    fn load(&mut self, source: &mut dyn ClauseSource) -> Result<LoadInfo, ErrorKind> {
        let header = source.read_header()?;
        let mut problem = Problem::new(header.literal_count, self.config.clone());
        problem.reserve_clauses(header.clause_count)?;

        let mut info = LoadInfo {
            header,
            ..LoadInfo::default()
        };

        while let Some(clause) = source.read_next_clause()? {
            info.read_clauses += 1;
            if problem.add_clause(clause)? == ClauseOk::Tautology {
                info.tautologies += 1;
            }
        }

        info.note_mismatch();
        log::info!(target: targets::PROBLEM, "Loaded {} clauses over {} atoms", problem.clause_count(), problem.atom_count());

        self.problem = problem;
        Ok(info)
    }

    fn solve(&mut self) -> Result<SolveResponse, ErrorKind> {
        self.monitor.begin();
        let outcome = search::solve(&mut self.problem, &mut self.monitor);
        self.monitor.finish();

        let response = match outcome? {
            Report::Satisfied => SolveResponse {
                outcome: Report::Satisfied,
                assignment: Some(self.problem.final_assignments()),
            },
            other => SolveResponse::without_assignment(other),
        };

        Ok(response)
    }

    fn counters(&self) -> &Counters {
        &self.monitor.counters
    }

    fn literal_count(&self) -> usize {
        self.problem.atom_count()
    }

    fn clause_count(&self) -> usize {
        self.problem.clause_count()
    }

    fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.monitor.set_callback_terminate(callback);
    }

    fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.monitor.set_callback_progress(callback);
    }
}
