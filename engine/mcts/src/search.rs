//! MCTS search driver.
//!
//! Implements one move decision:
//! 1. Short-circuit when there are zero or one legal moves
//! 2. Run playouts until the time limit or the iteration cap is reached
//! 3. Rank the root moves by win rate and return the best one

use std::time::{Duration, Instant};

use engine_core::{Board, PlayerId};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::MctsConfig;
use crate::node::{StatsEntry, StatsKey};
use crate::simulation::run_simulation;
use crate::stats::StatsStore;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("History is empty, there is no position to search from")]
    EmptyHistory,
}

/// Final counters and score of one root move.
#[derive(Debug, Clone)]
pub struct MoveStats<M> {
    pub play: M,
    /// Counters of the node this move leads to (zero if never expanded)
    pub entry: StatsEntry,
    /// Ranking score the move was compared by
    pub score: f64,
}

/// Diagnostics for one decision.
#[derive(Debug, Clone)]
pub struct SearchStats<M> {
    pub simulations: u32,
    pub elapsed: Duration,
    /// Deepest ply at which a node was expanded
    pub max_depth: usize,
    /// Entries in the store after the search
    pub store_size: usize,
    /// Per root move, in legal-move order
    pub moves: Vec<MoveStats<M>>,
}

impl<M> Default for SearchStats<M> {
    fn default() -> Self {
        Self {
            simulations: 0,
            elapsed: Duration::ZERO,
            max_depth: 0,
            store_size: 0,
            moves: Vec::new(),
        }
    }
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<M> {
    /// Chosen move, `None` when the position has no legal moves
    pub play: Option<M>,
    pub stats: SearchStats<M>,
}

/// MCTS search state.
pub struct MctsSearch<'a, B: Board> {
    board: &'a B,
    config: MctsConfig,
    rng: ChaCha20Rng,
    store: StatsStore<B::State>,
    /// Root mover the store's wins and losses are counted for
    perspective: Option<PlayerId>,
}

impl<'a, B: Board> MctsSearch<'a, B> {
    /// Create a searcher with its random source seeded from `config.seed`.
    pub fn new(board: &'a B, config: MctsConfig) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(config.seed);
        Self::with_rng(board, config, rng)
    }

    /// Create a searcher with an explicit random source.
    pub fn with_rng(board: &'a B, config: MctsConfig, rng: ChaCha20Rng) -> Self {
        Self {
            board,
            config,
            rng,
            store: StatsStore::new(),
            perspective: None,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Get the statistics store (for inspection/debugging).
    pub fn stats(&self) -> &StatsStore<B::State> {
        &self.store
    }

    /// Pick a move for the position at the end of `history`.
    ///
    /// Returns `Ok(None)` when there is no legal move.
    pub fn select_move(&mut self, history: &[B::State]) -> Result<Option<B::Move>, SearchError> {
        Ok(self.search(history)?.play)
    }

    /// Pick a move and report search diagnostics.
    pub fn search(&mut self, history: &[B::State]) -> Result<SearchOutcome<B::Move>, SearchError> {
        let root = history.last().ok_or(SearchError::EmptyHistory)?;
        let reference = self.board.current_player(root);

        // Reused counters are only meaningful for the same root mover
        if !self.config.reuse_statistics || self.perspective != Some(reference) {
            self.store.clear();
        }
        self.perspective = Some(reference);

        let mut legal = self.board.legal_plays(history);
        if legal.len() <= 1 {
            // No choice to make, spend no budget
            return Ok(SearchOutcome {
                play: legal.pop(),
                stats: SearchStats {
                    store_size: self.store.len(),
                    ..SearchStats::default()
                },
            });
        }

        let begin = Instant::now();
        let mut simulations = 0;
        let mut max_depth = 0;
        while simulations < self.config.max_iterations
            && self.config.time_limit.map_or(true, |limit| begin.elapsed() < limit)
        {
            let summary = run_simulation(
                self.board,
                &mut self.store,
                history,
                reference,
                &self.config,
                &mut self.rng,
            );
            if let Some(depth) = summary.expanded_depth {
                max_depth = max_depth.max(depth);
            }
            simulations += 1;
        }
        let elapsed = begin.elapsed();

        debug!(
            simulations = simulations,
            elapsed_ms = elapsed.as_millis() as u64,
            "Search budget spent"
        );

        let moves: Vec<MoveStats<B::Move>> = legal
            .into_iter()
            .map(|play| {
                let key = StatsKey::new(reference, self.board.next_state(root, &play));
                let entry = self.store.get(&key).copied().unwrap_or_default();
                let score = entry.ranking_score(self.config.draw_weight, self.config.ranking_epsilon);
                MoveStats { play, entry, score }
            })
            .collect();

        let best = best_move_index(&moves);
        for stats in &moves {
            debug!(
                play = ?stats.play,
                win_pct = 100.0 * stats.score,
                wins = stats.entry.wins,
                losses = stats.entry.losses,
                draws = stats.entry.draws,
                "Root move"
            );
        }
        debug!(max_depth = max_depth, "Maximum depth searched");

        Ok(SearchOutcome {
            play: best.map(|i| moves[i].play.clone()),
            stats: SearchStats {
                simulations,
                elapsed,
                max_depth,
                store_size: self.store.len(),
                moves,
            },
        })
    }
}

/// Index of the highest score; the earliest move wins ties.
fn best_move_index<M>(moves: &[MoveStats<M>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, stats) in moves.iter().enumerate() {
        match best {
            Some((_, score)) if stats.score <= score => {}
            _ => best = Some((i, stats.score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Convenience function to run a single decision with a fresh searcher.
pub fn run_search<B: Board>(
    board: &B,
    config: MctsConfig,
    history: &[B::State],
) -> Result<Option<B::Move>, SearchError> {
    MctsSearch::new(board, config).select_move(history)
}
