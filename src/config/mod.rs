/*!
Configuration of a solve.

All configuration is contained within [Config], and each configurable value is a [ConfigOption] noting the bounds of the value.

A [Config] is given to a solver on creation, and in turn to the [problem](crate::problem) the solver builds on loading a formula.
The configuration is fixed once a formula has been loaded.
*/

mod config_option;
pub use config_option::ConfigOption;

mod heuristic;
pub use heuristic::Heuristic;

mod search_form;
pub use search_form::SearchForm;

mod solver_kind;
pub use solver_kind::SolverKind;

/// Representation for the seed of the source of randomness.
pub type Seed = u64;

/// The number of calls between checks of the time limit, the progress interval, and the terminate callback.
pub const CHECK_FREQUENCY: usize = 1024;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which solver to use.
    pub solver: ConfigOption<SolverKind>,

    /// How to choose an atom when making a decision.
    pub heuristic: ConfigOption<Heuristic>,

    /// Whether to search with an explicit stack or by recursion.
    pub search: ConfigOption<SearchForm>,

    /// Cache the clauses satisfied by the valuation, and skip these when scanning the formula.
    ///
    /// Always enabled for the [cached](SolverKind::Cached) solver.
    pub satisfaction_cache: ConfigOption<bool>,

    /// Store the literals of a clause ordered by atom.
    pub sort_clauses: ConfigOption<bool>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<Seed>,

    /// The time limit for a solve, with a zero duration for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// The (minimum) interval between reports on the progress of a solve.
    pub progress_interval: ConfigOption<std::time::Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            solver: ConfigOption {
                name: "solver",
                min: SolverKind::MIN,
                max: SolverKind::MAX,
                value: SolverKind::NoCopy,
            },

            heuristic: ConfigOption {
                name: "heuristic",
                min: Heuristic::MIN,
                max: Heuristic::MAX,
                value: Heuristic::Greedy,
            },

            search: ConfigOption {
                name: "search",
                min: SearchForm::MIN,
                max: SearchForm::MAX,
                value: SearchForm::Iterative,
            },

            satisfaction_cache: ConfigOption {
                name: "satisfaction_cache",
                min: false,
                max: true,
                value: false,
            },

            sort_clauses: ConfigOption {
                name: "sort_clauses",
                min: false,
                max: true,
                value: true,
            },

            seed: ConfigOption {
                name: "seed",
                min: Seed::MIN,
                max: Seed::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },

            progress_interval: ConfigOption {
                name: "progress_interval",
                min: std::time::Duration::from_millis(1),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(10),
            },
        }
    }
}

impl Config {
    /// The default configuration, with `kind` as the solver.
    pub fn for_solver(kind: SolverKind) -> Self {
        let mut config = Config::default();
        config.solver.value = kind;
        config
    }

    /// Whether the satisfaction cache is used, either by request or by choice of solver.
    pub fn caches_satisfaction(&self) -> bool {
        self.satisfaction_cache.value || self.solver.value == SolverKind::Cached
    }
}
