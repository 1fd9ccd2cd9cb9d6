//! Small boards used by the unit tests of this crate.

use std::cell::Cell;

use engine_core::{Board, PlayerId, Winner};
use rand_chacha::ChaCha20Rng;

/// Take one or two stones; whoever takes the last stone wins.
#[derive(Debug)]
pub struct Nim;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pile {
    pub left: u8,
    pub to_move: PlayerId,
    pub last: Option<PlayerId>,
}

impl Pile {
    pub fn new(left: u8, to_move: PlayerId) -> Self {
        Self {
            left,
            to_move,
            last: None,
        }
    }
}

impl Board for Nim {
    type State = Pile;
    type Move = u8;

    fn start(&self, _rng: &mut ChaCha20Rng) -> Pile {
        Pile::new(5, PlayerId::ONE)
    }

    fn current_player(&self, state: &Pile) -> PlayerId {
        state.to_move
    }

    fn legal_plays(&self, history: &[Pile]) -> Vec<u8> {
        let left = history.last().map_or(0, |s| s.left);
        (1..=2).filter(|&n| n <= left).collect()
    }

    fn next_state(&self, state: &Pile, take: &u8) -> Pile {
        Pile {
            left: state.left - take,
            to_move: state.to_move.opponent(),
            last: Some(state.to_move),
        }
    }

    fn winner(&self, history: &[Pile]) -> Winner {
        match history.last() {
            Some(Pile {
                left: 0,
                last: Some(p),
                ..
            }) => Winner::Player(*p),
            _ => Winner::Undecided,
        }
    }
}

/// A game that never ends: `width` moves are always legal and nobody wins.
#[derive(Debug)]
pub struct Endless {
    width: u8,
}

/// (plies played, path fingerprint)
pub type Trail = (u32, u64);

impl Endless {
    pub fn new(width: u8) -> Self {
        Self { width }
    }

    pub fn root(&self) -> Trail {
        (0, 0)
    }
}

impl Board for Endless {
    type State = Trail;
    type Move = u8;

    fn start(&self, _rng: &mut ChaCha20Rng) -> Trail {
        self.root()
    }

    fn current_player(&self, state: &Trail) -> PlayerId {
        if state.0 % 2 == 0 {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }

    fn legal_plays(&self, _history: &[Trail]) -> Vec<u8> {
        (0..self.width).collect()
    }

    fn next_state(&self, state: &Trail, play: &u8) -> Trail {
        (
            state.0 + 1,
            state.1.wrapping_mul(31).wrapping_add(*play as u64 + 1),
        )
    }

    fn winner(&self, _history: &[Trail]) -> Winner {
        Winner::Undecided
    }
}

/// No legal moves anywhere.
#[derive(Debug)]
pub struct DeadEnd;

impl Board for DeadEnd {
    type State = u8;
    type Move = u8;

    fn start(&self, _rng: &mut ChaCha20Rng) -> u8 {
        0
    }

    fn current_player(&self, _state: &u8) -> PlayerId {
        PlayerId::ONE
    }

    fn legal_plays(&self, _history: &[u8]) -> Vec<u8> {
        Vec::new()
    }

    fn next_state(&self, state: &u8, _play: &u8) -> u8 {
        *state
    }

    fn winner(&self, _history: &[u8]) -> Winner {
        Winner::Undecided
    }
}

/// Offers exactly one move and refuses to compute more than one transition.
#[derive(Debug, Default)]
pub struct OnlyMove {
    pub transitions: Cell<usize>,
}

impl Board for OnlyMove {
    type State = u8;
    type Move = char;

    fn start(&self, _rng: &mut ChaCha20Rng) -> u8 {
        0
    }

    fn current_player(&self, _state: &u8) -> PlayerId {
        PlayerId::ONE
    }

    fn legal_plays(&self, _history: &[u8]) -> Vec<char> {
        vec!['x']
    }

    fn next_state(&self, state: &u8, _play: &char) -> u8 {
        let calls = self.transitions.get() + 1;
        assert!(calls <= 1, "next_state called {calls} times");
        self.transitions.set(calls);
        state + 1
    }

    fn winner(&self, _history: &[u8]) -> Winner {
        Winner::Undecided
    }
}

/// Two root moves that both end the game in an immediate draw, listed in
/// the given order.
#[derive(Debug)]
pub struct TwinDraws {
    pub order: [char; 2],
}

impl Board for TwinDraws {
    type State = char;
    type Move = char;

    fn start(&self, _rng: &mut ChaCha20Rng) -> char {
        'r'
    }

    fn current_player(&self, state: &char) -> PlayerId {
        if *state == 'r' {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }

    fn legal_plays(&self, history: &[char]) -> Vec<char> {
        match history.last() {
            Some('r') => self.order.to_vec(),
            _ => Vec::new(),
        }
    }

    fn next_state(&self, _state: &char, play: &char) -> char {
        *play
    }

    fn winner(&self, history: &[char]) -> Winner {
        match history.last() {
            Some('r') | None => Winner::Undecided,
            Some(_) => Winner::Tie,
        }
    }
}
