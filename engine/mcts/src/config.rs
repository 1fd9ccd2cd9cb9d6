//! MCTS configuration parameters.

use std::time::Duration;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Wall-clock budget per decision.
    /// `None` leaves the iteration cap as the only budget, which makes a
    /// search fully reproducible for a fixed seed.
    pub time_limit: Option<Duration>,

    /// Maximum number of simulations per decision.
    pub max_iterations: u32,

    /// Plies per playout before it is abandoned as undecided.
    pub max_moves: usize,

    /// Exploration constant `C` of the UCB1 formula.
    /// Higher values spread simulations across siblings, lower values
    /// concentrate them on the best-scoring child.
    pub exploration: f64,

    /// Weight of a draw in the UCB1 denominator and in the final ranking.
    pub draw_weight: f64,

    /// Stabilizing constant added to the final ranking denominator so that
    /// unvisited moves score 0 instead of dividing by zero.
    pub ranking_epsilon: f64,

    /// Keep statistics across `select_move` calls on the same searcher
    /// instead of starting every decision from an empty store.
    pub reuse_statistics: bool,

    /// Seed for the searcher's random source.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            time_limit: Some(Duration::from_millis(80)),
            max_iterations: 10_000,
            max_moves: 100,
            exploration: 5.0,
            draw_weight: 0.1,
            ranking_epsilon: 0.1,
            reuse_statistics: false,
            seed: 10,
        }
    }
}

impl MctsConfig {
    /// Create config for engine-vs-engine matches (longer budget per move).
    pub fn for_match() -> Self {
        Self {
            time_limit: Some(Duration::from_millis(500)),
            ..Self::default()
        }
    }

    /// Create a fast, deterministic config for testing.
    pub fn for_testing() -> Self {
        Self {
            time_limit: None,
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Builder pattern: set the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Builder pattern: rely on the iteration cap only.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit = None;
        self
    }

    /// Builder pattern: set the simulation cap.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }

    /// Builder pattern: set the playout depth cap.
    pub fn with_max_moves(mut self, n: usize) -> Self {
        self.max_moves = n;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set the draw weight.
    pub fn with_draw_weight(mut self, w: f64) -> Self {
        self.draw_weight = w;
        self
    }

    /// Builder pattern: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder pattern: keep statistics between decisions.
    pub fn with_reuse_statistics(mut self, reuse: bool) -> Self {
        self.reuse_statistics = reuse;
        self
    }
}

impl From<&engine_config::SearchConfig> for MctsConfig {
    fn from(search: &engine_config::SearchConfig) -> Self {
        Self {
            time_limit: search.time_limit(),
            max_iterations: search.max_iterations,
            max_moves: search.max_moves,
            exploration: search.exploration,
            draw_weight: search.draw_weight,
            ranking_epsilon: search.ranking_epsilon,
            reuse_statistics: search.reuse_statistics,
            seed: search.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.time_limit, Some(Duration::from_millis(80)));
        assert_eq!(config.max_iterations, 10_000);
        assert_eq!(config.max_moves, 100);
        assert!((config.exploration - 5.0).abs() < 1e-6);
        assert!((config.draw_weight - 0.1).abs() < 1e-6);
        assert!(!config.reuse_statistics);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_iterations(100)
            .with_exploration(0.5)
            .without_time_limit();

        assert_eq!(config.max_iterations, 100);
        assert!((config.exploration - 0.5).abs() < 1e-6);
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_testing_config_is_iteration_bound() {
        let config = MctsConfig::for_testing();
        assert!(config.time_limit.is_none());
        assert_eq!(config.max_iterations, 500);
    }

    #[test]
    fn test_from_central_config() {
        let mut search = engine_config::SearchConfig::default();
        search.time_limit_ms = 0;
        search.exploration = 10.0;
        search.reuse_statistics = true;

        let config = MctsConfig::from(&search);
        assert!(config.time_limit.is_none());
        assert!((config.exploration - 10.0).abs() < 1e-6);
        assert!(config.reuse_statistics);
        assert_eq!(config.seed, 10);
    }
}
