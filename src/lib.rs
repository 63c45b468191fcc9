pub mod action_selection;
pub mod agent;
pub mod config;
pub mod error;
pub mod features;
pub mod mdp;
pub mod policy;
pub mod utils;

pub use agent::{QLearningAgent, QLearningAgentBuilder, ValueEstimationAgent, ValueIterationAgent};
pub use error::{AgentError, Result};
