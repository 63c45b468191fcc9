use log::{info, trace};

use super::ValueEstimationAgent;
use crate::config::ValueIterationConfig;
use crate::error::Result;
use crate::mdp::MarkovDecisionProcess;
use crate::utils::{argmax, Counter};

/// Offline planner: runs a fixed number of batch Bellman sweeps over a known
/// model when built, then answers queries from the resulting values.
///
/// Never explores and never draws random numbers; two agents built from the
/// same model and configuration hold bit-identical values.
#[derive(Debug, Clone)]
pub struct ValueIterationAgent<M: MarkovDecisionProcess> {
    mdp: M,
    discount: f64,
    iterations: usize,
    values: Counter<M::State>,
}

impl<M: MarkovDecisionProcess> ValueIterationAgent<M> {
    pub fn new(mdp: M, config: ValueIterationConfig) -> Result<Self> {
        config.validate()?;
        let mut agent = Self {
            mdp,
            discount: config.discount,
            iterations: config.iterations,
            values: Counter::new(),
        };
        agent.run_value_iteration();
        Ok(agent)
    }

    /// Discount 0.9, 100 sweeps.
    pub fn with_defaults(mdp: M) -> Result<Self> {
        Self::new(mdp, ValueIterationConfig::default())
    }

    // Every sweep reads only the previous snapshot and commits a fresh one, so
    // no state sees a value updated earlier in the same sweep.
    fn run_value_iteration(&mut self) {
        let states = self.mdp.states();
        for iteration in 0..self.iterations {
            let mut new_values = Counter::new();
            let mut max_change: f64 = 0.0;
            for state in states.iter() {
                let value = if self.mdp.is_terminal(state) {
                    0.0
                } else {
                    self.mdp
                        .possible_actions(state)
                        .iter()
                        .map(|action| self.compute_q_value_from_values(state, action))
                        .reduce(f64::max)
                        .unwrap_or(0.0)
                };
                max_change = max_change.max((value - self.values.get(state)).abs());
                new_values.insert(state.clone(), value);
            }
            self.values = new_values;
            trace!("sweep {}: max value change {}", iteration + 1, max_change);
        }
        info!(
            "value iteration finished {} sweeps over {} states",
            self.iterations,
            states.len()
        );
    }

    /// Expected one-step return of `action` in `state` under the committed
    /// values. An empty transition list gives 0.
    pub fn compute_q_value_from_values(&self, state: &M::State, action: &M::Action) -> f64 {
        self.mdp
            .transition_states_and_probs(state, action)
            .iter()
            .fold(0.0, |q_value, (next_state, probability)| {
                let reward = self.mdp.reward(state, action, next_state);
                q_value + probability * (reward + self.discount * self.values.get(next_state))
            })
    }

    /// Greedy action; the first action reaching the maximum wins.
    pub fn compute_action_from_values(&self, state: &M::State) -> Option<M::Action> {
        if self.mdp.is_terminal(state) {
            return None;
        }
        let actions = self.mdp.possible_actions(state);
        let q_values: Vec<f64> = actions
            .iter()
            .map(|action| self.compute_q_value_from_values(state, action))
            .collect();
        argmax(&q_values).map(|best| actions[best].clone())
    }

    pub fn values(&self) -> &Counter<M::State> {
        &self.values
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn mdp(&self) -> &M {
        &self.mdp
    }
}

impl<M: MarkovDecisionProcess> ValueEstimationAgent<M::State, M::Action>
    for ValueIterationAgent<M>
{
    fn get_q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.compute_q_value_from_values(state, action)
    }

    fn get_value(&self, state: &M::State) -> f64 {
        self.values.get(state)
    }

    fn get_policy(&mut self, state: &M::State) -> Option<M::Action> {
        self.compute_action_from_values(state)
    }

    fn get_action(&mut self, state: &M::State) -> Option<M::Action> {
        self.compute_action_from_values(state)
    }
}
