mod builder;
mod episode_stats;
mod qlearning_agent;
mod value_iteration_agent;

pub use builder::QLearningAgentBuilder;
pub use episode_stats::EpisodeStats;
pub use qlearning_agent::QLearningAgent;
pub use value_iteration_agent::ValueIterationAgent;

/// Legal actions available in a state; empty for terminal or dead-end states.
pub type ActionFn<S, A> = Box<dyn Fn(&S) -> Vec<A>>;

/// Hook told about every action a learner hands back to its driver.
pub type ActionObserver<S, A> = Box<dyn FnMut(&S, &A)>;

/// Queries shared by the planner and the learners.
pub trait ValueEstimationAgent<S, A> {
    fn get_q_value(&self, state: &S, action: &A) -> f64;

    fn get_value(&self, state: &S) -> f64;

    /// Best action under the current estimates, without exploration.
    fn get_policy(&mut self, state: &S) -> Option<A>;

    /// Action to take in `state`; may explore.
    fn get_action(&mut self, state: &S) -> Option<A>;
}
