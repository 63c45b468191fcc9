use log::{debug, info, trace};
use std::fmt::Debug;
use std::hash::Hash;

use super::{ActionFn, ActionObserver, EpisodeStats, QLearningAgentBuilder, ValueEstimationAgent};
use crate::action_selection::EpsilonGreedy;
use crate::config::{check_unit_interval, HyperParameters};
use crate::error::Result;
use crate::policy::{Policy, QPolicy};
use crate::utils::{max, Counter};

/// Model-free learner driven one observed transition at a time.
///
/// The Q-value representation is injected: a [`TabularPolicy`] gives plain
/// Q-learning, a [`LinearPolicy`] gives approximate Q-learning over extracted
/// features. Exploration, tie-breaking and the temporal-difference target are
/// the same for both because they only go through [`Policy::predict`].
///
/// Callers must serialise all calls on one agent; nothing here is shared.
///
/// [`TabularPolicy`]: crate::policy::TabularPolicy
/// [`LinearPolicy`]: crate::policy::LinearPolicy
pub struct QLearningAgent<S, A, F = (S, A)>
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
    F: Hash + Eq + Clone,
{
    policy: QPolicy<S, A, F>,
    action_selection: EpsilonGreedy,
    action_fn: ActionFn<S, A>,
    observer: Option<ActionObserver<S, A>>,
    learning_rate: f64,
    discount: f64,
    num_training: usize,
    stats: EpisodeStats,
}

impl<S, A, F> Debug for QLearningAgent<S, A, F>
where
    S: Hash + Eq + Clone + Debug,
    A: Hash + Eq + Clone + Debug,
    F: Hash + Eq + Clone + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QLearningAgent")
            .field("policy", &self.policy)
            .field("action_selection", &self.action_selection)
            .field("learning_rate", &self.learning_rate)
            .field("discount", &self.discount)
            .field("num_training", &self.num_training)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<S, A, F> QLearningAgent<S, A, F>
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
    F: Hash + Eq + Clone,
{
    pub fn builder() -> QLearningAgentBuilder<S, A, F> {
        QLearningAgentBuilder::new()
    }

    pub(super) fn new(
        policy: QPolicy<S, A, F>,
        params: HyperParameters,
        seed: Option<u64>,
        action_fn: ActionFn<S, A>,
        observer: Option<ActionObserver<S, A>>,
    ) -> Self {
        Self {
            policy,
            action_selection: EpsilonGreedy::new(params.epsilon, seed),
            action_fn,
            observer,
            learning_rate: params.learning_rate,
            discount: params.discount,
            num_training: params.num_training,
            stats: EpisodeStats::default(),
        }
    }

    pub fn legal_actions(&self, state: &S) -> Vec<A> {
        (self.action_fn)(state)
    }

    fn q_values(&self, state: &S, actions: &[A]) -> Vec<f64> {
        actions
            .iter()
            .map(|action| self.policy.predict(state, action))
            .collect()
    }

    /// Max Q-value over legal actions, 0 when there are none.
    pub fn compute_value_from_q_values(&self, state: &S) -> f64 {
        let actions = self.legal_actions(state);
        max(&self.q_values(state, &actions)).unwrap_or(0.0)
    }

    /// Greedy action. Ties are broken uniformly at random.
    pub fn compute_action_from_q_values(&mut self, state: &S) -> Option<A> {
        let actions = self.legal_actions(state);
        let values = self.q_values(state, &actions);
        self.action_selection.greedy(&actions, &values).cloned()
    }

    /// Learns from one transition and returns the temporal difference.
    pub fn update(&mut self, state: &S, action: &A, next_state: &S, reward: f64) -> f64 {
        let target = reward + self.discount * self.compute_value_from_q_values(next_state);
        let difference = self.policy.update(state, action, target, self.learning_rate);
        trace!("temporal difference {}", difference);
        difference
    }

    /// [`update`](Self::update) plus reward accounting for the running episode.
    pub fn observe_transition(
        &mut self,
        state: &S,
        action: &A,
        next_state: &S,
        reward: f64,
    ) -> f64 {
        self.stats.observe_reward(reward);
        self.update(state, action, next_state, reward)
    }

    pub fn start_episode(&mut self) {
        self.stats.start_episode();
    }

    /// End-of-episode hook. Reports once the training budget is spent but
    /// leaves epsilon and the learning rate alone; switching to evaluation
    /// is the driver's call.
    pub fn finish_episode(&mut self, _state: &S) {
        self.stats.finish_episode(self.num_training);
        if self.stats.episodes_so_far == self.num_training {
            info!(
                "finished {} training episodes, accumulated reward {}",
                self.num_training, self.stats.accum_train_rewards
            );
            if let Some(weights) = self.weights() {
                debug!("learned {} feature weights", weights.len());
            }
        }
    }

    pub fn policy(&self) -> &QPolicy<S, A, F> {
        &self.policy
    }

    /// Feature weights of an approximate learner.
    pub fn weights(&self) -> Option<&Counter<F>> {
        match &self.policy {
            QPolicy::Linear(policy) => Some(policy.weights()),
            QPolicy::Tabular(_) => None,
        }
    }

    /// Q-table of a tabular learner.
    pub fn q_table(&self) -> Option<&Counter<(S, A)>> {
        match &self.policy {
            QPolicy::Tabular(policy) => Some(policy.q_values()),
            QPolicy::Linear(_) => None,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.action_selection.epsilon()
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        check_unit_interval("epsilon", epsilon)?;
        self.action_selection.set_epsilon(epsilon);
        Ok(())
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        check_unit_interval("learning_rate", learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn num_training(&self) -> usize {
        self.num_training
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    pub fn is_in_training(&self) -> bool {
        self.stats.is_in_training(self.num_training)
    }

    pub fn is_in_testing(&self) -> bool {
        !self.is_in_training()
    }
}

impl<S, A, F> ValueEstimationAgent<S, A> for QLearningAgent<S, A, F>
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
    F: Hash + Eq + Clone,
{
    fn get_q_value(&self, state: &S, action: &A) -> f64 {
        self.policy.predict(state, action)
    }

    fn get_value(&self, state: &S) -> f64 {
        self.compute_value_from_q_values(state)
    }

    fn get_policy(&mut self, state: &S) -> Option<A> {
        self.compute_action_from_q_values(state)
    }

    /// Epsilon-greedy. Every returned action is reported to the observer.
    fn get_action(&mut self, state: &S) -> Option<A> {
        let actions = self.legal_actions(state);
        if actions.is_empty() {
            return None;
        }
        let values = self.q_values(state, &actions);
        let action = self.action_selection.get_action(&actions, &values)?.clone();
        if let Some(observer) = self.observer.as_mut() {
            observer(state, &action);
        }
        Some(action)
    }
}
