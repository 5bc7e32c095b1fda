//! Choosing an atom to make a decision on.
//!
//! The choice is made by the [heuristic](crate::config::Heuristic) of the configuration:
//! - [Random](Heuristic::Random) chooses uniformly from the unvalued atoms, using the source of randomness of the problem.
//! - [Greedy](Heuristic::Greedy) chooses the unvalued atom with the most occurrences (with either polarity) in the formula, and the polarity with the most occurrences.
//!   Ties between atoms are broken in favour of the smaller atom, and ties between polarities in favour of positive polarity.
//! - [First](Heuristic::First) chooses the smallest unvalued atom.
//!
//! The choice is returned as a literal, as the greedy heuristic also suggests a polarity.
//! The other heuristics always suggest positive polarity.

use rand::seq::IteratorRandom;

use crate::{
    config::Heuristic,
    misc::log::targets::{self},
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self},
};

use super::GenericProblem;

impl<R: rand::Rng> GenericProblem<R> {
    /// A literal whose atom has no value, chosen by the configured heuristic.
    ///
    /// Errors if every atom has some value.
    pub fn unassigned_variable(&mut self) -> Result<CLiteral, err::ProblemError> {
        let choice = match self.config.heuristic.value {
            Heuristic::Random => self
                .atom_db
                .valuation()
                .unvalued_atoms()
                .choose(&mut self.rng)
                .map(|atom| CLiteral::new(atom, true)),

            Heuristic::Greedy => {
                let mut best = None;
                let mut best_count = 0;
                for atom in self.atom_db.valuation().unvalued_atoms() {
                    let occurrences = self.atom_db.occurrences(atom);
                    if best.is_none() || occurrences.most() > best_count {
                        best_count = occurrences.most();
                        best = Some(CLiteral::new(atom, occurrences.leaning()));
                    }
                }
                best
            }

            Heuristic::First => self
                .atom_db
                .valuation()
                .unvalued_atoms()
                .next()
                .map(|atom| CLiteral::new(atom, true)),
        };

        match choice {
            Some(literal) => {
                log::trace!(target: targets::SEARCH, "Chose {literal}");
                Ok(literal)
            }
            None => Err(err::ProblemError::NoUnassignedAtom),
        }
    }
}

#[cfg(test)]
mod selection_tests {
    use crate::{config::Config, problem::Problem};

    use super::*;

    fn config_with(heuristic: Heuristic) -> Config {
        let mut config = Config::default();
        config.heuristic.value = heuristic;
        config
    }

    #[test]
    fn random_fairness() {
        let mut problem = Problem::new(2, config_with(Heuristic::Random));

        let trials = 1000;
        let mut ones = 0;
        for _ in 0..trials {
            match problem.unassigned_variable() {
                Ok(1) => ones += 1,
                Ok(2) => {}
                unexpected => panic!("Unexpected choice: {unexpected:?}"),
            }
        }

        assert!((375..=625).contains(&ones), "{ones} of {trials}");
    }

    #[test]
    fn random_fairness_across_atoms() {
        for seed in [0, 1, 73] {
            let mut config = config_with(Heuristic::Random);
            config.seed.value = seed;
            let mut problem = Problem::new(5, config);

            let mut counts = [0; 6];
            for _ in 0..5000 {
                match problem.unassigned_variable() {
                    Ok(literal) => counts[literal as usize] += 1,
                    unexpected => panic!("Unexpected choice: {unexpected:?}"),
                }
            }

            assert_eq!(counts[0], 0);
            for count in &counts[1..] {
                assert!((850..=1150).contains(count), "{counts:?} with seed {seed}");
            }
        }
    }

    #[test]
    fn random_skips_valued_atoms() {
        let mut problem = Problem::new(3, config_with(Heuristic::Random));
        assert!(problem.set_literal(1, true, true).is_ok());
        assert!(problem.set_literal(3, false, false).is_ok());

        for _ in 0..20 {
            assert_eq!(problem.unassigned_variable(), Ok(2));
        }
    }

    #[test]
    fn greedy_by_occurrence() {
        let mut problem = Problem::new(3, config_with(Heuristic::Greedy));
        for clause in [vec![1, -3], vec![2, -3], vec![-2, -3], vec![1, 2]] {
            assert!(problem.add_clause(clause).is_ok());
        }

        assert_eq!(problem.unassigned_variable(), Ok(-3));
        assert!(problem.set_literal(3, false, true).is_ok());

        // Both 1 and 2 occur twice positively, and the smaller atom is preferred.
        assert_eq!(problem.unassigned_variable(), Ok(1));
        assert!(problem.set_literal(1, true, true).is_ok());

        assert_eq!(problem.unassigned_variable(), Ok(2));
    }

    #[test]
    fn first_unvalued() {
        let mut problem = Problem::new(3, config_with(Heuristic::First));
        assert!(problem.set_literal(1, false, true).is_ok());
        assert_eq!(problem.unassigned_variable(), Ok(2));
    }

    #[test]
    fn exhausted() {
        for heuristic in [Heuristic::Random, Heuristic::Greedy, Heuristic::First] {
            let mut problem = Problem::new(1, config_with(heuristic));
            assert!(problem.set_literal(1, true, true).is_ok());
            assert_eq!(
                problem.unassigned_variable(),
                Err(err::ProblemError::NoUnassignedAtom)
            );
        }
    }
}
