use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    seq::SliceRandom,
    SeedableRng,
};

use crate::utils::max;

/// Epsilon-greedy exploration with its own random source.
///
/// The same source drives the exploration coin flip, the random action and
/// the tie-break among equally valued greedy actions, so a seeded instance
/// replays exactly.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    exploration_decider: Uniform<f64>,
    epsilon: f64,
    rng: StdRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, seed: Option<u64>) -> Self {
        Self {
            exploration_decider: Uniform::from(0.0..1.0),
            epsilon,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// Bernoulli trial with success probability epsilon.
    pub fn should_explore(&mut self) -> bool {
        self.epsilon != 0.0 && self.exploration_decider.sample(&mut self.rng) < self.epsilon
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Uniform choice among every action whose value equals the maximum.
    pub fn greedy<'a, A>(&mut self, legal: &'a [A], values: &[f64]) -> Option<&'a A> {
        let best = max(values)?;
        let ties: Vec<&A> = legal
            .iter()
            .zip(values)
            .filter(|(_, value)| **value == best)
            .map(|(action, _)| action)
            .collect();
        // all-NaN values leave no ties
        ties.choose(&mut self.rng).copied().or(legal.first())
    }

    pub fn get_action<'a, A>(&mut self, legal: &'a [A], values: &[f64]) -> Option<&'a A> {
        if self.should_explore() {
            self.choose(legal)
        } else {
            self.greedy(legal, values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_epsilon_never_explores() {
        let mut selection = EpsilonGreedy::new(0.0, Some(7));
        assert!((0..1_000).all(|_| !selection.should_explore()));
    }

    #[test]
    fn full_epsilon_always_explores() {
        let mut selection = EpsilonGreedy::new(1.0, Some(7));
        assert!((0..1_000).all(|_| selection.should_explore()));
    }

    #[test]
    fn greedy_picks_unique_max() {
        let mut selection = EpsilonGreedy::new(0.0, Some(1));
        let legal = ['a', 'b', 'c'];
        for _ in 0..100 {
            assert_eq!(selection.get_action(&legal, &[0.1, 0.7, -1.0]), Some(&'b'));
        }
    }

    #[test]
    fn greedy_breaks_ties_randomly() {
        let mut selection = EpsilonGreedy::new(0.0, Some(3));
        let legal = ['a', 'b', 'c'];
        let picks: Vec<char> = (0..200)
            .filter_map(|_| selection.greedy(&legal, &[1.0, 0.0, 1.0]).copied())
            .collect();
        assert!(picks.contains(&'a'));
        assert!(picks.contains(&'c'));
        assert!(!picks.contains(&'b'));
    }

    #[test]
    fn empty_legal_set_yields_none() {
        let mut selection = EpsilonGreedy::new(0.5, Some(3));
        let legal: [char; 0] = [];
        for _ in 0..20 {
            assert_eq!(selection.get_action(&legal, &[]), None);
        }
    }

    #[test]
    fn seeded_instances_replay() {
        let legal = [0, 1, 2, 3];
        let values = [0.0; 4];
        let mut first = EpsilonGreedy::new(0.5, Some(11));
        let mut second = EpsilonGreedy::new(0.5, Some(11));
        for _ in 0..100 {
            assert_eq!(
                first.get_action(&legal, &values),
                second.get_action(&legal, &values)
            );
        }
    }
}
