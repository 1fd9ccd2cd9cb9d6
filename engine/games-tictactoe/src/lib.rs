//! TicTacToe board for the Playout engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the `Board` trait.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Board, PlayerId, Winner};
//! use games_tictactoe::{State, TicTacToe};
//!
//! let board = TicTacToe::new();
//! let mut history = vec![State::new_with_player(1)];
//! for cell in [0, 3, 1, 4, 2] {
//!     let next = board.next_state(history.last().unwrap(), &cell);
//!     history.push(next);
//! }
//! assert_eq!(board.winner(&history), Winner::Player(PlayerId::ONE));
//! ```

use engine_core::{Board, PlayerId, Winner};
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// A cell index, 0-8 in row-major order.
pub type Move = u8;

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// TicTacToe game state
///
/// The board and the player to move. Equal states are the same position,
/// which is what the search memoizes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Current player: 1=X, 2=O
    current_player: u8,
}

impl State {
    /// Create an empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(1)
    }

    /// Create an empty board with the given player (1 or 2) to move.
    /// Anything other than 2 means X.
    pub fn new_with_player(player: u8) -> Self {
        Self {
            board: [0; 9],
            current_player: if player == 2 { 2 } else { 1 },
        }
    }

    /// Build a state from raw cells, for setting up positions.
    pub fn from_cells(board: [u8; 9], current_player: u8) -> Self {
        Self {
            board,
            current_player,
        }
    }

    pub fn cells(&self) -> &[u8; 9] {
        &self.board
    }

    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    /// Outcome of this position
    pub fn winner(&self) -> Winner {
        Self::check_winner(&self.board)
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner().is_decided()
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: Move) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;
        new_state.current_player = if self.current_player == 1 { 2 } else { 1 };
        new_state
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> Winner {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return Winner::from_code(board[a] as i32);
            }
        }

        // Board full but no winner
        if board.iter().all(|&cell| cell != 0) {
            return Winner::Tie;
        }

        Winner::Undecided
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// TicTacToe rules
#[derive(Debug, Clone, Copy)]
pub struct TicTacToe;

impl TicTacToe {
    /// Create a new TicTacToe game
    pub fn new() -> Self {
        Self
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for TicTacToe {
    type State = State;
    type Move = Move;

    /// Empty board, first mover drawn uniformly from X and O.
    fn start(&self, rng: &mut ChaCha20Rng) -> State {
        State::new_with_player(rng.gen_range(1..=2))
    }

    fn current_player(&self, state: &State) -> PlayerId {
        PlayerId::new(state.current_player).unwrap_or(PlayerId::ONE)
    }

    fn legal_plays(&self, history: &[State]) -> Vec<Move> {
        history.last().map(State::legal_moves).unwrap_or_default()
    }

    fn next_state(&self, state: &State, play: &Move) -> State {
        state.make_move(*play)
    }

    fn winner(&self, history: &[State]) -> Winner {
        history.last().map(State::winner).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
