use std::hash::Hash;

use super::Policy;
use crate::utils::Counter;

/// Explicit Q-table keyed by `(state, action)`.
#[derive(Debug, Clone)]
pub struct TabularPolicy<S: Hash + Eq + Clone, A: Hash + Eq + Clone> {
    q_values: Counter<(S, A)>,
}

impl<S: Hash + Eq + Clone, A: Hash + Eq + Clone> Default for TabularPolicy<S, A> {
    fn default() -> Self {
        Self {
            q_values: Counter::new(),
        }
    }
}

impl<S: Hash + Eq + Clone, A: Hash + Eq + Clone> TabularPolicy<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn q_values(&self) -> &Counter<(S, A)> {
        &self.q_values
    }
}

impl<S: Hash + Eq + Clone, A: Hash + Eq + Clone> Policy<S, A> for TabularPolicy<S, A> {
    fn predict(&self, state: &S, action: &A) -> f64 {
        self.q_values.get(&(state.clone(), action.clone()))
    }

    fn update(&mut self, state: &S, action: &A, target: f64, learning_rate: f64) -> f64 {
        let key = (state.clone(), action.clone());
        let value = self.q_values.get(&key);
        self.q_values
            .insert(key, (1.0 - learning_rate) * value + learning_rate * target);
        target - value
    }
}
