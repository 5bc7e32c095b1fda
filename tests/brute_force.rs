use rand::{Rng, SeedableRng};

use trail_sat::{
    config::{Config, Heuristic, SearchForm, SolverKind},
    generic::random::MinimalPCG32,
    io::ClauseList,
    reports::Report,
    solvers::solver_from_config,
    structures::clause::CClause,
};

/// A random formula of `clause_count` clauses over `atom_count` atoms, each clause of one to three literals.
fn random_formula(rng: &mut MinimalPCG32, atom_count: usize, clause_count: usize) -> Vec<CClause> {
    (0..clause_count)
        .map(|_| {
            let length = rng.random_range(1..=3);
            (0..length)
                .map(|_| {
                    let atom = rng.random_range(1..=atom_count) as i32;
                    match rng.random_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

fn satisfies(assignment: &[bool], clauses: &[CClause]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|literal| assignment[literal.unsigned_abs() as usize] == literal.is_positive())
    })
}

/// Satisfiability by a check of every valuation.
fn truth_table(atom_count: usize, clauses: &[CClause]) -> bool {
    (0..(1_u32 << atom_count)).any(|bits| {
        let assignment: Vec<bool> = (0..=atom_count)
            .map(|atom| atom > 0 && (bits >> (atom - 1)) & 1 == 1)
            .collect();
        satisfies(&assignment, clauses)
    })
}

#[test]
fn against_truth_table() {
    let mut rng = MinimalPCG32::from_seed(91_u64.to_le_bytes());

    let mut counts = [0, 0];

    for round in 0..120 {
        let atom_count = rng.random_range(1..=8);
        let clause_count = rng.random_range(0..=4 * atom_count);
        let formula = random_formula(&mut rng, atom_count, clause_count);

        let expected = truth_table(atom_count, &formula);
        counts[expected as usize] += 1;

        for kind in SolverKind::ALL {
            for heuristic in [Heuristic::Random, Heuristic::Greedy, Heuristic::First] {
                for search in [SearchForm::Iterative, SearchForm::Recursive] {
                    let mut config = Config::for_solver(kind);
                    config.heuristic.value = heuristic;
                    config.search.value = search;
                    config.seed.value = round;

                    let mut solver = solver_from_config(config);
                    let mut source = ClauseList::new(atom_count, formula.clone());
                    assert!(solver.load(&mut source).is_ok());

                    let response = solver.solve().unwrap();
                    match expected {
                        true => {
                            assert_eq!(response.outcome, Report::Satisfied, "{formula:?}");
                            let assignment = response.assignment.unwrap();
                            assert_eq!(assignment.len(), atom_count + 1);
                            assert!(satisfies(&assignment, &formula), "{formula:?}");
                        }
                        false => assert_eq!(response.outcome, Report::Unsatisfied, "{formula:?}"),
                    }
                }
            }
        }
    }

    // Some of each.
    assert!(counts[0] > 0 && counts[1] > 0);
}

#[test]
fn forms_agree_on_counters() {
    let mut rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());

    for _ in 0..40 {
        let formula = random_formula(&mut rng, 10, 40);

        for kind in [SolverKind::NoCopy, SolverKind::Cached] {
            let responses: Vec<_> = [SearchForm::Iterative, SearchForm::Recursive]
                .into_iter()
                .map(|search| {
                    let mut config = Config::for_solver(kind);
                    config.search.value = search;

                    let mut solver = solver_from_config(config);
                    let mut source = ClauseList::new(10, formula.clone());
                    assert!(solver.load(&mut source).is_ok());

                    let response = solver.solve().unwrap();
                    let counters = solver.counters();
                    (response, counters.calls, counters.decisions, counters.backtracks)
                })
                .collect();

            assert_eq!(responses[0], responses[1]);
        }
    }
}
