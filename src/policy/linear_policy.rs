use std::fmt::Debug;
use std::hash::Hash;

use super::Policy;
use crate::features::FeatureExtractor;
use crate::utils::Counter;

/// Q(s, a) as a weighted sum of extracted features.
pub struct LinearPolicy<S, A, F: Hash + Eq + Clone> {
    weights: Counter<F>,
    extractor: Box<dyn FeatureExtractor<S, A, F>>,
}

impl<S, A, F: Hash + Eq + Clone + Debug> Debug for LinearPolicy<S, A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearPolicy")
            .field("weights", &self.weights)
            .finish()
    }
}

impl<S, A, F: Hash + Eq + Clone> LinearPolicy<S, A, F> {
    pub fn new(extractor: Box<dyn FeatureExtractor<S, A, F>>) -> Self {
        Self {
            weights: Counter::new(),
            extractor,
        }
    }

    pub fn weights(&self) -> &Counter<F> {
        &self.weights
    }
}

impl<S, A, F: Hash + Eq + Clone> Policy<S, A> for LinearPolicy<S, A, F> {
    fn predict(&self, state: &S, action: &A) -> f64 {
        self.extractor
            .get_features(state, action)
            .iter()
            .map(|(feature, value)| self.weights.get(feature) * value)
            .sum()
    }

    // Gradient step on the squared temporal difference. Features absent from
    // this pair have zero gradient and keep their weight.
    fn update(&mut self, state: &S, action: &A, target: f64, learning_rate: f64) -> f64 {
        let features = self.extractor.get_features(state, action);
        let q_value: f64 = features
            .iter()
            .map(|(feature, value)| self.weights.get(feature) * value)
            .sum();
        let difference = target - q_value;
        for (feature, value) in features {
            self.weights.add(feature, learning_rate * difference * value);
        }
        difference
    }
}
