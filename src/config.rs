//! Hyperparameters for the planner and the learners.

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};

pub(crate) fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AgentError::InvalidHyperparameter {
            name,
            value,
            expected: "a value in [0, 1]",
        })
    }
}

/// Learner configuration.
///
/// `learning_rate` and `epsilon` may be set to 0 by the driving loop to put a
/// learner in pure evaluation mode.
///
/// ```
/// use mdp_agents::config::HyperParameters;
///
/// let params = HyperParameters::default()
///     .with_epsilon(0.1)
///     .with_learning_rate(0.2)
///     .with_discount(0.9);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperParameters {
    /// Exploration probability.
    pub epsilon: f64,
    /// Step size of each update.
    #[serde(alias = "alpha")]
    pub learning_rate: f64,
    /// Discount applied to the value of the next state.
    #[serde(alias = "gamma")]
    pub discount: f64,
    /// Number of episodes the driver treats as training.
    #[serde(alias = "numTraining")]
    pub num_training: usize,
}

impl Default for HyperParameters {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            learning_rate: 0.5,
            discount: 1.0,
            num_training: 100,
        }
    }
}

impl HyperParameters {
    /// Fixed defaults used by the Pacman learner.
    pub fn pacman() -> Self {
        Self {
            epsilon: 0.05,
            learning_rate: 0.2,
            discount: 0.8,
            num_training: 0,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_num_training(mut self, num_training: usize) -> Self {
        self.num_training = num_training;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("epsilon", self.epsilon)?;
        check_unit_interval("learning_rate", self.learning_rate)?;
        check_unit_interval("discount", self.discount)
    }

    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }
}

/// Planner configuration: discount and the exact number of sweeps to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueIterationConfig {
    #[serde(alias = "gamma")]
    pub discount: f64,
    pub iterations: usize,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            discount: 0.9,
            iterations: 100,
        }
    }
}

impl ValueIterationConfig {
    pub fn new(discount: f64, iterations: usize) -> Self {
        Self {
            discount,
            iterations,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_unit_interval("discount", self.discount)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
