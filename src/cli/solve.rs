use std::{path::PathBuf, time::Instant};

use clap::ArgMatches;

use trail_sat::{
    io::dimacs::DimacsReader,
    reports::Report,
    solvers::{solver_from_config, Counters},
};

use crate::{parse::config_from_args, read::file_reader};

/// Solves the formula at the path of `args`, returning the exit code of the solve.
pub fn solve(args: &ArgMatches) -> i32 {
    let config = config_from_args(args);

    let Some(path) = args.get_one::<PathBuf>("path") else {
        println!("c No file given");
        return 1;
    };

    let mut reader = match file_reader(path) {
        Ok(reader) => DimacsReader::new(reader),
        Err(e) => {
            println!("c {e}");
            return 1;
        }
    };

    let mut solver = solver_from_config(config);
    println!("c Solver: {}", solver.name());
    println!("c File: {}", path.display());

    let load_start = Instant::now();
    let info = match solver.load(&mut reader) {
        Ok(info) => info,
        Err(e) => {
            println!("c Error loading {}: {e}", path.display());
            return 1;
        }
    };
    println!(
        "c Literals: {}, clauses: {} ({} read, {} tautologies)",
        solver.literal_count(),
        solver.clause_count(),
        info.read_clauses,
        info.tautologies
    );
    println!("c Load time: {:.2?}", load_start.elapsed());

    solver.set_callback_progress(Box::new(|counters: &Counters| {
        println!("c {:.2?} {}", counters.time, counters.calls);
    }));

    let response = match solver.solve() {
        Ok(response) => response,
        Err(e) => {
            println!("c Solver error: {e}");
            return 1;
        }
    };

    let counters = solver.counters();
    println!(
        "c Calls: {}, decisions: {}, backtracks: {}",
        counters.calls, counters.decisions, counters.backtracks
    );

    println!("s {}", response.outcome.competition_status());
    if args.get_flag("model") {
        if let Some(model) = response.model_string() {
            println!("v {model}");
        }
    }
    println!("c Solve time: {:.2?}", counters.time);

    match response.outcome {
        Report::Satisfied => 10,
        Report::Unsatisfied => 20,
        Report::Unknown => 30,
    }
}
