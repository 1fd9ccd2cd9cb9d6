//! Engine-vs-engine matches.
//!
//! An [`Arena`] seats two [`MctsSearch`] players (each with its own
//! [`MctsConfig`]) at one board and plays complete games between them.
//! Typical use is comparing exploration constants or time budgets:
//!
//! ```rust
//! use engine_arena::{Arena, ArenaConfig};
//! use games_tictactoe::TicTacToe;
//! use mcts::MctsConfig;
//!
//! let board = TicTacToe::new();
//! let mut arena = Arena::new(
//!     &board,
//!     MctsConfig::for_testing().with_exploration(10.0).with_iterations(50),
//!     MctsConfig::for_testing().with_exploration(0.5).with_iterations(50),
//!     ArenaConfig::default(),
//! );
//! let summary = arena.play_series(2).unwrap();
//! assert_eq!(summary.games, 2);
//! ```

mod arena;
mod config;

pub use arena::{Arena, ArenaError, GameRecord, SeriesSummary};
pub use config::ArenaConfig;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
}
