mod linear_policy;
mod tabular_policy;

use enum_dispatch::enum_dispatch;
use std::hash::Hash;

pub use linear_policy::LinearPolicy;
pub use tabular_policy::TabularPolicy;

/// Representation of Q(s, a) that a learner reads and trains.
#[enum_dispatch]
pub trait Policy<S, A> {
    fn predict(&self, state: &S, action: &A) -> f64;

    /// Moves Q(s, a) toward `target` with step size `learning_rate` and
    /// returns the temporal difference `target - Q(s, a)` measured before the
    /// move.
    fn update(&mut self, state: &S, action: &A, target: f64, learning_rate: f64) -> f64;
}

#[derive(Debug)]
#[enum_dispatch(Policy<S, A>)]
pub enum QPolicy<S: Hash + Eq + Clone, A: Hash + Eq + Clone, F: Hash + Eq + Clone> {
    Tabular(TabularPolicy<S, A>),
    Linear(LinearPolicy<S, A, F>),
}
