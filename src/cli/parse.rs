use std::{path::PathBuf, str::FromStr, time::Duration};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use trail_sat::config::{Config, Heuristic, SearchForm, SolverKind};

pub fn cli() -> Command {
    Command::new("trail_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)

        .subcommand(Command::new("solve")
            .about("Solve the formula of a DIMACS file.")

            .arg(Arg::new("path")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS form CNF file to solve."))

            .arg(Arg::new("solver")
                .long("solver")
                .short('s')
                .value_name("NAME")
                .value_parser(clap::builder::ValueParser::new(solver_parser))
                .required(false)
                .num_args(1)
                .help(format!("The solver to use.
Default: {}", Config::default().solver.value))
                .long_help(format!("The solver to use.
Default: {}

  - simple : Copy the formula, reduced by each assignment.
  - no-copy: Keep a single copy of the formula, and record assignments on a trail.
  - cached : As no-copy, while also caching the clauses satisfied by the valuation.", Config::default().solver.value)))

            .arg(Arg::new("heuristic")
                .long("heuristic")
                .value_name("HEURISTIC")
                .value_parser(clap::builder::ValueParser::new(heuristic_parser))
                .required(false)
                .num_args(1)
                .help(format!("How to choose an atom for a decision.
Default: {}", Config::default().heuristic.value))
                .long_help(format!("How to choose an atom for a decision.
Default: {}

  - random: Any unvalued atom, uniformly.
  - greedy: The unvalued atom with the most occurrences of some polarity, valued with that polarity.
  - first : The unvalued atom with the least index.", Config::default().heuristic.value)))

            .arg(Arg::new("recursive")
                .long("recursive")
                .short('r')
                .action(ArgAction::SetTrue)
                .help("Search by recursion, rather than with an explicit stack."))

            .arg(Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .required(false)
                .num_args(1)
                .help(format!("The seed of the source of randomness.
Default: {}", Config::default().seed.value)))

            .arg(Arg::new("time_limit")
                .long("time-limit")
                .short('t')
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .required(false)
                .num_args(1)
                .help("Time limit for the solve in seconds.
Default: No limit"))

            .arg(Arg::new("progress")
                .long("progress")
                .short('p')
                .value_name("SECONDS")
                .value_parser(value_parser!(u64).range(1..))
                .required(false)
                .num_args(1)
                .help(format!("The interval between progress reports, in seconds.
Default: {}", Config::default().progress_interval.value.as_secs())))

            .arg(Arg::new("model")
                .long("model")
                .short('m')
                .action(ArgAction::SetTrue)
                .help("Display a satisfying valuation, if found.")))

        .subcommand(Command::new("inspect")
            .about("List the headers of the DIMACS files in a directory.")

            .arg(Arg::new("directory")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The directory to inspect."))

            .arg(Arg::new("pattern")
                .required(false)
                .default_value("*.cnf")
                .help("The pattern of file names to inspect.")))
}

fn unknown(kind: &str, arg: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Unknown {kind}: {arg}"))
}

fn solver_parser(arg: &str) -> Result<SolverKind, std::io::Error> {
    SolverKind::from_str(arg).map_err(|_| unknown("solver", arg))
}

fn heuristic_parser(arg: &str) -> Result<Heuristic, std::io::Error> {
    Heuristic::from_str(arg).map_err(|_| unknown("heuristic", arg))
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(kind)) = args.try_get_one::<SolverKind>("solver") {
        the_config.solver.value = *kind
    };

    if let Ok(Some(heuristic)) = args.try_get_one::<Heuristic>("heuristic") {
        the_config.heuristic.value = *heuristic
    };

    if args.get_flag("recursive") {
        the_config.search.value = SearchForm::Recursive
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed.value = *seed
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit.value = Duration::from_secs(*secs)
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("progress") {
        the_config.progress_interval.set(Duration::from_secs(*secs));
    };

    the_config
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn solve_args(args: &[&str]) -> ArgMatches {
        let matches = cli()
            .try_get_matches_from(["trail_sat", "solve"].iter().chain(args))
            .unwrap();
        matches.subcommand_matches("solve").unwrap().clone()
    }

    #[test]
    fn defaults() {
        let config = config_from_args(&solve_args(&["formula.cnf"]));
        assert_eq!(config.solver.value, SolverKind::NoCopy);
        assert_eq!(config.search.value, SearchForm::Iterative);
        assert!(config.time_limit.value.is_zero());
    }

    #[test]
    fn options() {
        let config = config_from_args(&solve_args(&[
            "--solver", "cached", "--heuristic", "first", "--recursive", "--seed", "7", "-t", "3", "formula.cnf",
        ]));
        assert_eq!(config.solver.value, SolverKind::Cached);
        assert_eq!(config.heuristic.value, Heuristic::First);
        assert_eq!(config.search.value, SearchForm::Recursive);
        assert_eq!(config.seed.value, 7);
        assert_eq!(config.time_limit.value, Duration::from_secs(3));
    }

    #[test]
    fn unknown_solver() {
        let matches = cli().try_get_matches_from(["trail_sat", "solve", "--solver", "clever", "formula.cnf"]);
        assert_eq!(
            matches.map_err(|e| e.kind()).err(),
            Some(clap::error::ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn unknown_names_are_invalid_input() {
        let solver = solver_parser("clever").map_err(|e| (e.kind(), e.to_string()));
        assert_eq!(
            solver.err(),
            Some((std::io::ErrorKind::InvalidInput, "Unknown solver: clever".to_string()))
        );

        let heuristic = heuristic_parser("lucky").map_err(|e| (e.kind(), e.to_string()));
        assert_eq!(
            heuristic.err(),
            Some((std::io::ErrorKind::InvalidInput, "Unknown heuristic: lucky".to_string()))
        );

        assert_eq!(solver_parser("simple").ok(), Some(SolverKind::Simple));
        assert_eq!(heuristic_parser("greedy").ok(), Some(Heuristic::Greedy));
    }
}
