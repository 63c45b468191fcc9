use std::hash::Hash;

use super::{ActionFn, ActionObserver, QLearningAgent};
use crate::config::HyperParameters;
use crate::error::{AgentError, Result};
use crate::features::{FeatureExtractor, IdentityExtractor};
use crate::policy::{LinearPolicy, QPolicy, TabularPolicy};

/// Builder for [`QLearningAgent`].
///
/// ```
/// use mdp_agents::agent::{QLearningAgent, QLearningAgentBuilder};
///
/// let agent: QLearningAgent<u8, char> = QLearningAgentBuilder::pacman()
///     .seed(42)
///     .action_fn(|state: &u8| if *state == 0 { vec![] } else { vec!['l', 'r'] })
///     .build_tabular()
///     .unwrap();
/// assert_eq!(agent.epsilon(), 0.05);
/// ```
pub struct QLearningAgentBuilder<S, A, F = (S, A)> {
    params: HyperParameters,
    seed: Option<u64>,
    action_fn: Option<ActionFn<S, A>>,
    observer: Option<ActionObserver<S, A>>,
    extractor: Option<Box<dyn FeatureExtractor<S, A, F>>>,
}

impl<S, A, F> Default for QLearningAgentBuilder<S, A, F> {
    fn default() -> Self {
        Self {
            params: HyperParameters::default(),
            seed: None,
            action_fn: None,
            observer: None,
            extractor: None,
        }
    }
}

impl<S, A, F> QLearningAgentBuilder<S, A, F>
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
    F: Hash + Eq + Clone,
{
    /// Builder with the generic learner defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with the Pacman learner's fixed defaults.
    pub fn pacman() -> Self {
        Self::default().params(HyperParameters::pacman())
    }

    pub fn params(mut self, params: HyperParameters) -> Self {
        self.params = params;
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.params.epsilon = epsilon;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.params.learning_rate = learning_rate;
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.params.discount = discount;
        self
    }

    pub fn num_training(mut self, num_training: usize) -> Self {
        self.params.num_training = num_training;
        self
    }

    /// Seed for exploration and tie-breaking. Unseeded agents draw from
    /// system entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn action_fn(mut self, action_fn: impl Fn(&S) -> Vec<A> + 'static) -> Self {
        self.action_fn = Some(Box::new(action_fn));
        self
    }

    /// Called with every `(state, action)` pair the agent returns from
    /// `get_action`.
    pub fn on_action(mut self, observer: impl FnMut(&S, &A) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn feature_extractor(
        mut self,
        extractor: impl FeatureExtractor<S, A, F> + 'static,
    ) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    pub fn build_tabular(self) -> Result<QLearningAgent<S, A, F>> {
        self.build(|_| Ok(QPolicy::Tabular(TabularPolicy::new())))
    }

    pub fn build_approximate(self) -> Result<QLearningAgent<S, A, F>> {
        self.build(|extractor| {
            let extractor = extractor.ok_or(AgentError::MissingFeatureExtractor)?;
            Ok(QPolicy::Linear(LinearPolicy::new(extractor)))
        })
    }

    fn build(
        self,
        policy: impl FnOnce(Option<Box<dyn FeatureExtractor<S, A, F>>>) -> Result<QPolicy<S, A, F>>,
    ) -> Result<QLearningAgent<S, A, F>> {
        self.params.validate()?;
        let action_fn = self.action_fn.ok_or(AgentError::MissingActionFn)?;
        let policy = policy(self.extractor)?;
        Ok(QLearningAgent::new(
            policy,
            self.params,
            self.seed,
            action_fn,
            self.observer,
        ))
    }
}

impl<S, A> QLearningAgentBuilder<S, A, (S, A)>
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
{
    /// One indicator feature per `(state, action)` pair.
    pub fn identity_features(self) -> Self {
        self.feature_extractor(IdentityExtractor)
    }
}
