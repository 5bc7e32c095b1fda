/*!
The state of a problem --- a formula, together with a (partial) valuation built during a solve.

Strictly, a [GenericProblem] and a [Problem].

The generic problem is generic over the source of randomness used when choosing an atom to make a decision on.
[Problem] fixes this source to [MinimalPCG32], seeded from the [config](crate::config::Config).

A problem is created with a known count of atoms and clauses, and all storage is allocated on creation.
In particular, the valuation, the [trail](crate::db::trail) of assignments, and the satisfaction cache of the [clause database](crate::db::clause) are never resized during a solve.

The lifecycle of a problem is:
- Clauses are added, while the problem is in the [Input](ProblemState::Input) state.
- Assignments are made and undone, and the problem queried, while the problem is in the [Solving](ProblemState::Solving) state.
  The first assignment moves the problem to this state, and after this no further clauses may be added.
- A search may settle the problem as [Satisfiable](ProblemState::Satisfiable) or [Unsatisfiable](ProblemState::Unsatisfiable).

No clause is mutated after being added.
Instead, the status of each clause is derived from the valuation on each query.

# Example
```rust
# use trail_sat::problem::Problem;
# use trail_sat::config::Config;
let mut problem = Problem::new(2, Config::default());
assert!(problem.add_clause(vec![1, -2]).is_ok());

assert!(problem.set_literal(1, false, true).is_ok());
assert_eq!(problem.unit_clause_literal(), Some(-2));

assert!(problem.rollback().is_ok());
assert!(problem.rollback().is_err());
```
*/

mod assignment;
mod build;
pub mod preprocess;
mod queries;
mod selection;

pub use build::ClauseOk;

use rand::SeedableRng;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail},
    generic::random::MinimalPCG32,
    reports::Report,
};

/// The state of a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemState {
    /// The problem allows input.
    Input,

    /// Some assignment has been made, and the satisfiability of the formula is unknown.
    Solving,

    /// The formula is known to be satisfied by the valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ProblemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A generic problem, paramaterised to a source of randomness.
pub struct GenericProblem<R: rand::Rng> {
    /// The configuration of the problem.
    pub config: Config,

    /// The state of the problem.
    pub state: ProblemState,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The source of rng.
    pub rng: R,

    /// For each atom, the polarities the atom has been seen with in the clauses not yet satisfied.
    /// A buffer for [pure_literals](GenericProblem::pure_literals).
    polarity_buffer: Vec<u8>,
}

/// A problem which uses [MinimalPCG32] as a source of randomness.
pub type Problem = GenericProblem<MinimalPCG32>;

impl Problem {
    /// Creates a problem over the atoms `1..=atom_count`, without any clauses.
    ///
    /// The source of randomness is seeded from `config`.
    pub fn new(atom_count: usize, config: Config) -> Self {
        let rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());
        Self::with_rng(atom_count, config, rng)
    }
}

impl<R: rand::Rng> GenericProblem<R> {
    /// Creates a problem over the atoms `1..=atom_count`, without any clauses, using `rng` as the source of randomness.
    pub fn with_rng(atom_count: usize, config: Config, rng: R) -> Self {
        log::info!(target: crate::misc::log::targets::PROBLEM, "Problem with {atom_count} atoms");

        GenericProblem {
            atom_db: AtomDB::new(atom_count),
            clause_db: ClauseDB::new(config.caches_satisfaction()),
            trail: Trail::with_capacity(atom_count),
            polarity_buffer: vec![0; atom_count + 1],

            config,
            state: ProblemState::Input,
            rng,
        }
    }

    /// A report on the state of the problem.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// A count of the atoms of the problem.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// A count of the clauses of the problem.
    pub fn clause_count(&self) -> usize {
        self.clause_db.count()
    }
}
