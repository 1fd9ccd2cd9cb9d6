//! Ultimate Tic-Tac-Toe board for the Playout engine
//!
//! Nine 3x3 boards ("quadrants") arranged in a 3x3 grid. Winning a quadrant
//! claims it; three claimed quadrants in a line win the game. The cell a
//! player picks inside its quadrant sends the opponent to the quadrant at
//! the same position, unless that quadrant is already closed, in which case
//! any open quadrant may be played.
//!
//! # Cell numbering
//!
//! Cells are numbered quadrant by quadrant: cell `q * 9 + i` is local cell
//! `i` of quadrant `q`, both in row-major order. Use [`to_index`] and
//! [`to_row_col`] to convert from and to coordinates on the 9x9 grid.

use engine_core::{Board, PlayerId, Winner};
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// A cell index, 0-80 in quadrant-major order.
pub type Move = u8;

pub const CELLS: usize = 81;
pub const QUADRANTS: usize = 9;

/// The eight lines of a 3x3 grid
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Convert 9x9 grid coordinates to a cell index.
///
/// Returns `None` when either coordinate is off the grid.
pub fn to_index(row: u8, col: u8) -> Option<Move> {
    if row >= 9 || col >= 9 {
        return None;
    }
    let quadrant = (row / 3) * 3 + col / 3;
    let local = (row % 3) * 3 + col % 3;
    Some(quadrant * 9 + local)
}

/// Convert a cell index to 9x9 grid coordinates.
pub fn to_row_col(index: Move) -> Option<(u8, u8)> {
    if index as usize >= CELLS {
        return None;
    }
    let (quadrant, local) = (index / 9, index % 9);
    Some(((quadrant / 3) * 3 + local / 3, (quadrant % 3) * 3 + local % 3))
}

/// State of one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quadrant {
    /// Still playable
    #[default]
    Open,
    /// Claimed by a player; closed to further play
    Won(PlayerId),
    /// Filled up without a line; closed to further play
    Full,
}

impl Quadrant {
    pub fn is_open(self) -> bool {
        self == Quadrant::Open
    }

    fn owner(self) -> Option<PlayerId> {
        match self {
            Quadrant::Won(p) => Some(p),
            _ => None,
        }
    }
}

/// Ultimate Tic-Tac-Toe game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// 0=empty, 1=X, 2=O
    cells: [u8; CELLS],
    quadrants: [Quadrant; QUADRANTS],
    /// 1=X, 2=O
    current_player: u8,
    last_move: Option<Move>,
}

impl State {
    /// Create an empty board with the given player (1 or 2) to move.
    /// Anything other than 2 means X.
    pub fn new_with_player(player: u8) -> Self {
        Self {
            cells: [0; CELLS],
            quadrants: [Quadrant::Open; QUADRANTS],
            current_player: if player == 2 { 2 } else { 1 },
            last_move: None,
        }
    }

    pub fn cell(&self, index: Move) -> u8 {
        self.cells.get(index as usize).copied().unwrap_or(0)
    }

    pub fn quadrant(&self, q: usize) -> Quadrant {
        self.quadrants.get(q).copied().unwrap_or(Quadrant::Full)
    }

    pub fn current_player(&self) -> u8 {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Quadrants the player to move may play in.
    pub fn playable_quadrants(&self) -> Vec<usize> {
        if let Some(last) = self.last_move {
            let forced = (last % 9) as usize;
            if self.quadrants[forced].is_open() {
                return vec![forced];
            }
        }
        (0..QUADRANTS)
            .filter(|&q| self.quadrants[q].is_open())
            .collect()
    }

    /// Get legal moves: empty cells of every playable quadrant
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner().is_decided() {
            return Vec::new();
        }

        self.playable_quadrants()
            .into_iter()
            .flat_map(|q| (q * 9..q * 9 + 9).filter(|&i| self.cells[i] == 0))
            .map(|i| i as Move)
            .collect()
    }

    /// Whether `index` is among [`legal_moves`](Self::legal_moves).
    pub fn is_legal(&self, index: Move) -> bool {
        let i = index as usize;
        if i >= CELLS || self.cells[i] != 0 {
            return false;
        }
        let quadrant = i / 9;
        if !self.quadrants[quadrant].is_open() {
            return false;
        }
        if let Some(last) = self.last_move {
            let forced = (last % 9) as usize;
            if forced != quadrant && self.quadrants[forced].is_open() {
                return false;
            }
        }
        !self.winner().is_decided()
    }

    /// Make a move and return the new state.
    ///
    /// Illegal moves leave the state unchanged.
    pub fn make_move(&self, index: Move) -> State {
        if !self.is_legal(index) {
            return *self;
        }

        let mut next = *self;
        let player = self.current_player;
        let quadrant = index as usize / 9;
        next.cells[index as usize] = player;

        let local = &next.cells[quadrant * 9..quadrant * 9 + 9];
        if let Some(winner) = line_owner(|i| PlayerId::new(local[i])) {
            next.quadrants[quadrant] = Quadrant::Won(winner);
        }
        // A filled quadrant is dead even if its last cell completed a line
        if local.iter().all(|&c| c != 0) {
            next.quadrants[quadrant] = Quadrant::Full;
        }

        next.last_move = Some(index);
        next.current_player = if player == 1 { 2 } else { 1 };
        next
    }

    /// Outcome: a line of won quadrants, or a tie once no quadrant is open
    pub fn winner(&self) -> Winner {
        if let Some(p) = line_owner(|q| self.quadrants[q].owner()) {
            return Winner::Player(p);
        }
        if self.quadrants.iter().all(|q| !q.is_open()) {
            return Winner::Tie;
        }
        Winner::Undecided
    }
}

/// Owner of the first complete line on a 3x3 grid described by `at`.
fn line_owner(at: impl Fn(usize) -> Option<PlayerId>) -> Option<PlayerId> {
    LINES.iter().find_map(|&[a, b, c]| match (at(a), at(b), at(c)) {
        (Some(x), Some(y), Some(z)) if x == y && y == z => Some(x),
        _ => None,
    })
}

/// Ultimate Tic-Tac-Toe rules
#[derive(Debug, Clone, Copy, Default)]
pub struct UltimateTicTacToe;

impl UltimateTicTacToe {
    pub fn new() -> Self {
        Self
    }
}

impl Board for UltimateTicTacToe {
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
