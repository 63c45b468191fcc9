/// End-of-episode accounting for a learner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeStats {
    pub episodes_so_far: usize,
    pub accum_train_rewards: f64,
    pub accum_test_rewards: f64,
    pub episode_rewards: f64,
}

impl EpisodeStats {
    pub fn start_episode(&mut self) {
        self.episode_rewards = 0.0;
    }

    pub fn observe_reward(&mut self, reward: f64) {
        self.episode_rewards += reward;
    }

    /// Files the current episode's rewards under training or testing and
    /// advances the episode counter.
    pub fn finish_episode(&mut self, num_training: usize) {
        if self.episodes_so_far < num_training {
            self.accum_train_rewards += self.episode_rewards;
        } else {
            self.accum_test_rewards += self.episode_rewards;
        }
        self.episodes_so_far += 1;
        self.episode_rewards = 0.0;
    }

    pub fn is_in_training(&self, num_training: usize) -> bool {
        self.episodes_so_far < num_training
    }
}
