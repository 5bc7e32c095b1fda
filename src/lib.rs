//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! trail_sat is a DPLL solver.
//! That is, a solve alternates between extending a valuation by assignments forced by the formula (unit propagation and pure literal elimination) and deciding on the value of some unvalued atom, with a chronological backtrack on each conflict.
//!
//! Three solvers are provided, each an implementation of the [SatSolver](solvers::SatSolver) capability:
//! - A `simple` solver, which copies the formula, reduced by each assignment.
//! - A `no-copy` solver, which keeps a single copy of the formula, and records assignments on a [trail](db::trail).
//!   Undoing a decision is then a matter of truncating the trail.
//! - A `cached` solver, which is the `no-copy` solver together with a cache of the clauses satisfied by the current valuation.
//!
//! # Orientation
//!
//! The core structure of the library is a [problem].
//!
//! A problem is built with a configuration and a known count of atoms and clauses, after which clauses are added either [programatically](problem::GenericProblem::add_clause) or through some [source](io::ClauseSource), such as a [DIMACS reader](io::dimacs::DimacsReader).
//!
//! Internally, a problem is a handful of databases:
//! - The formula is stored in a [clause database](db::clause).
//! - The valuation is stored in an [atom database](db::atom).
//! - The assignments made, and the decision each assignment follows, are stored on a [trail](db::trail).
//!
//! Useful starting points, then, may be:
//! - The [search procedure](procedures::search) to inspect the dynamics of a solve.
//! - The [database module](db) to inspect the data considered during a solve.
//! - The [configuration](config) to see what features are supported.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use trail_sat::config::Config;
//! # use trail_sat::io::dimacs::DimacsReader;
//! # use trail_sat::reports::Report;
//! # use trail_sat::solvers::solver_from_config;
//! let dimacs = b"p cnf 2 4
//! 1 2 0
//! -1 2 0
//! -1 -2 0
//! 1 -2 0
//! ";
//!
//! let mut solver = solver_from_config(Config::default());
//! let mut reader = DimacsReader::new(dimacs.as_slice());
//!
//! assert!(solver.load(&mut reader).is_ok());
//! assert_eq!(solver.solve().map(|response| response.outcome), Ok(Report::Unsatisfied));
//! ```
//!
//! + Build a problem and solve it, directly.
//!
//! ```rust
//! # use trail_sat::config::Config;
//! # use trail_sat::problem::Problem;
//! # use trail_sat::procedures::search;
//! # use trail_sat::reports::Report;
//! # use trail_sat::solvers::Monitor;
//! let config = Config::default();
//! let mut problem = Problem::new(3, config.clone());
//!
//! assert!(problem.add_clause(vec![1, 2]).is_ok());
//! assert!(problem.add_clause(vec![-1, -3]).is_ok());
//!
//! let mut monitor = Monitor::new(&config);
//! assert_eq!(search::solve(&mut problem, &mut monitor), Ok(Report::Satisfied));
//! assert!(problem.check_satisfaction().is_ok());
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//!
//! ```sh
//! RUST_LOG=search=debug trail_sat solve formula.cnf
//! ```
//!
//! Note, logs are not built for release.

pub mod config;
pub mod db;
pub mod generic;
pub mod io;
pub mod misc;
pub mod problem;
pub mod procedures;
pub mod reports;
pub mod solvers;
pub mod structures;
pub mod types;
