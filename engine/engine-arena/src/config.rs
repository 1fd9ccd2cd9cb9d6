//! Match configuration.

/// Settings for a series of games.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Games played by `Arena::play_configured_series`.
    pub games: u32,
    /// Plies after which a game is stopped as undecided.
    pub max_plies: usize,
    /// Seed for the arena's random source (starting positions).
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            max_plies: 100,
            seed: 12345,
        }
    }
}

impl ArenaConfig {
    /// Builder pattern: set the series length.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Builder pattern: set the ply cap.
    pub fn with_max_plies(mut self, n: usize) -> Self {
        self.max_plies = n;
        self
    }

    /// Builder pattern: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl From<&engine_config::ArenaConfig> for ArenaConfig {
    fn from(arena: &engine_config::ArenaConfig) -> Self {
        Self {
            games: arena.games,
            max_plies: arena.max_plies,
            seed: arena.seed,
        }
    }
}
