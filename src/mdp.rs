use std::hash::Hash;

/// Read-only view of a finite MDP with a fully known model.
///
/// `states` must return the same order on every call within a run so that
/// planners built on it are reproducible.
pub trait MarkovDecisionProcess {
    type State: Hash + Eq + Clone;
    type Action: Clone;

    fn states(&self) -> Vec<Self::State>;

    /// Legal actions in `state`. Empty for terminal or dead-end states.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// `(next_state, probability)` pairs for taking `action` in `state`.
    fn transition_states_and_probs(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Vec<(Self::State, f64)>;

    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64;

    fn is_terminal(&self, state: &Self::State) -> bool;
}
