//! Monte Carlo Tree Search (MCTS) move selection with UCB1 and draws.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` [`Board`](engine_core::Board) trait.
//!
//! # Overview
//!
//! The search tree is never built as linked nodes. Instead a flat
//! [`StatsStore`] maps `(player who moved, resulting position)` to win / loss /
//! draw / play counters, and children are recomputed with the board's
//! transition function whenever they are needed. Each simulation:
//!
//! 1. **Selection**: at every ply, score the children with UCB1 if all of them
//!    have statistics, otherwise pick one uniformly at random
//! 2. **Expansion**: the first child reached that has no entry gets one
//!    (at most one per simulation)
//! 3. **Playout**: keep selecting until the game is decided, no move is
//!    legal (a draw), or the depth cap is reached (undecided)
//! 4. **Backpropagation**: every visited node with an entry counts a play,
//!    and a win, loss or draw from the point of view of the player to move
//!    at the root
//!
//! Once the budget is spent, root moves are ranked by
//! `wins / (epsilon + losses + wins + draw_weight * wins)`.
//!
//! # Usage
//!
//! ```rust
//! use mcts::{MctsConfig, MctsSearch};
//! use games_tictactoe::{State, TicTacToe};
//!
//! let board = TicTacToe::new();
//! let config = MctsConfig::for_testing().with_iterations(200);
//! let mut search = MctsSearch::new(&board, config);
//!
//! let history = vec![State::new_with_player(1)];
//! let play = search.select_move(&history).unwrap();
//! assert!(play.is_some());
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `time_limit`: Wall-clock budget per decision (default: 80 ms, `None` = iterations only)
//! - `max_iterations`: Simulation cap per decision (default: 10 000)
//! - `max_moves`: Playout depth cap (default: 100)
//! - `exploration`: UCB1 exploration constant (default: 5.0)
//! - `draw_weight`: Weight of a draw in scores (default: 0.1)

pub mod config;
pub mod node;
pub mod search;
pub mod selection;
pub mod simulation;
pub mod stats;

#[cfg(test)]
mod test_boards;

// Re-export main types
pub use config::MctsConfig;
pub use node::{StatField, StatsEntry, StatsKey};
pub use search::{run_search, MctsSearch, MoveStats, SearchError, SearchOutcome, SearchStats};
pub use selection::{select_candidate, ucb1_score, Mode};
pub use simulation::{backpropagate, run_simulation, PlayoutSummary};
pub use stats::StatsStore;
