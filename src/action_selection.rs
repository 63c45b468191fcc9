mod epsilon_greedy;

pub use epsilon_greedy::EpsilonGreedy;
