//! Game loop and result bookkeeping for engine-vs-engine play.

use std::time::Instant;

use engine_config::CentralConfig;
use engine_core::{Board, PlayerId, Winner};
use mcts::{MctsConfig, MctsSearch, SearchError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ArenaConfig;

/// Errors that can occur while playing a match.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

/// One finished (or abandoned) game.
#[derive(Debug, Clone)]
pub struct GameRecord<B: Board> {
    /// Every position from the start, one more than `plays`
    pub history: Vec<B::State>,
    pub plays: Vec<B::Move>,
    pub first_player: PlayerId,
    /// `Undecided` when the ply cap stopped the game
    pub winner: Winner,
    /// Simulations spent by each seat over the whole game
    pub simulations: [u64; 2],
}

impl<B: Board> GameRecord<B> {
    pub fn plies(&self) -> usize {
        self.plays.len()
    }
}

/// Tally of a series of games, by seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesSummary {
    pub games: u32,
    /// Wins for the player 1 seat and the player 2 seat
    pub wins: [u32; 2],
    pub draws: u32,
    /// Games stopped by the ply cap
    pub undecided: u32,
}

impl SeriesSummary {
    /// Record one game outcome.
    pub fn record(&mut self, winner: Winner) {
        self.games += 1;
        match winner {
            Winner::Player(p) => self.wins[seat(p)] += 1,
            Winner::Tie => self.draws += 1,
            Winner::Undecided => self.undecided += 1,
        }
    }

    /// Fraction of games won by `player`'s seat.
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[seat(player)] as f64 / self.games as f64
        }
    }
}

/// Seat index for a player: 0 for player 1, 1 for everyone else.
fn seat(player: PlayerId) -> usize {
    if player == PlayerId::ONE {
        0
    } else {
        1
    }
}

/// Two searchers sharing one board.
pub struct Arena<'a, B: Board> {
    board: &'a B,
    players: [MctsSearch<'a, B>; 2],
    config: ArenaConfig,
    rng: ChaCha20Rng,
}

impl<'a, B: Board> Arena<'a, B> {
    /// Seat `player_one` as player 1 and `player_two` as player 2.
    pub fn new(
        board: &'a B,
        player_one: MctsConfig,
        player_two: MctsConfig,
        config: ArenaConfig,
    ) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(config.seed);
        Self {
            board,
            players: [
                MctsSearch::new(board, player_one),
                MctsSearch::new(board, player_two),
            ],
            config,
            rng,
        }
    }

    /// Both seats use the `[search]` section; player 2's seed is offset by
    /// one so the seats do not share a random stream.
    pub fn from_central_config(board: &'a B, central: &CentralConfig) -> Self {
        let player_one = MctsConfig::from(&central.search);
        let player_two = player_one
            .clone()
            .with_seed(player_one.seed.wrapping_add(1));
        Self::new(
            board,
            player_one,
            player_two,
            ArenaConfig::from(&central.arena),
        )
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play one game from a fresh starting position.
    pub fn play_game(&mut self) -> Result<GameRecord<B>, ArenaError> {
        let begin = Instant::now();
        let start = self.board.start(&mut self.rng);
        let first_player = self.board.current_player(&start);
        let mut history = vec![start];
        let mut plays = Vec::new();
        let mut simulations = [0u64; 2];

        let winner = loop {
            let winner = self.board.winner(&history);
            if winner.is_decided() {
                break winner;
            }
            if plays.len() >= self.config.max_plies {
                break Winner::Undecided;
            }

            let current = &history[history.len() - 1];
            let mover = seat(self.board.current_player(current));
            let outcome = self.players[mover].search(&history)?;
            simulations[mover] += outcome.stats.simulations as u64;

            let Some(play) = outcome.play else {
                // The player to move is stuck
                break Winner::Tie;
            };
            debug!(
                ply = plays.len() + 1,
                seat = mover + 1,
                play = ?play,
                simulations = outcome.stats.simulations,
                "Move chosen"
            );

            let next = self.board.next_state(current, &play);
            history.push(next);
            plays.push(play);
        };

        info!(
            plies = plays.len(),
            first_player = %first_player,
            winner = %winner,
            elapsed_ms = begin.elapsed().as_millis() as u64,
            "Game finished"
        );

        Ok(GameRecord {
            history,
            plays,
            first_player,
            winner,
            simulations,
        })
    }

    /// Play `games` games and tally the results.
    pub fn play_series(&mut self, games: u32) -> Result<SeriesSummary, ArenaError> {
        let mut summary = SeriesSummary::default();
        for _ in 0..games {
            let record = self.play_game()?;
            summary.record(record.winner);
        }

        info!(
            games = summary.games,
            player_one_wins = summary.wins[0],
            player_two_wins = summary.wins[1],
            draws = summary.draws,
            undecided = summary.undecided,
            "Series finished"
        );
        Ok(summary)
    }

    /// Play the number of games set in the arena configuration.
    pub fn play_configured_series(&mut self) -> Result<SeriesSummary, ArenaError> {
        self.play_series(self.config.games)
    }
}
