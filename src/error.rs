//! Error types for agent construction.

use thiserror::Error;

/// Failures an agent can report. All of them happen while building an agent;
/// queries and updates on a built agent never fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AgentError {
    #[error("invalid hyperparameter: {name} = {value} (expected {expected})")]
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("no legal-action function was supplied to the learner")]
    MissingActionFn,

    #[error("approximate learner requires a feature extractor")]
    MissingFeatureExtractor,

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;
