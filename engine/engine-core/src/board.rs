//! Board capability trait implemented by every game.
//!
//! The search engine never looks inside a state or a move. Everything it
//! needs (whose turn it is, which moves are legal, what a move leads to and
//! whether the game is over) comes through this trait.

use crate::outcome::{PlayerId, Winner};
use rand_chacha::ChaCha20Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// Rules of a deterministic, perfect-information, two-player game.
///
/// # Type Parameters
///
/// * `State` - Immutable position, compared and hashed by value. The engine
///   uses it as a map key, so two equal states must describe the same position.
/// * `Move` - Opaque action produced by [`legal_plays`](Board::legal_plays)
///   and handed back to [`next_state`](Board::next_state).
///
/// # Example
///
/// ```rust
/// # use engine_core::{Board, PlayerId, Winner};
/// # use rand_chacha::ChaCha20Rng;
/// /// Players alternately take 1 or 2 from a pile; taking the last one wins.
/// #[derive(Debug)]
/// struct Nim;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Pile { left: u8, to_move: PlayerId, last: Option<PlayerId> }
///
/// impl Board for Nim {
///     type State = Pile;
///     type Move = u8;
///
///     fn start(&self, _rng: &mut ChaCha20Rng) -> Pile {
///         Pile { left: 5, to_move: PlayerId::ONE, last: None }
///     }
///     fn current_player(&self, state: &Pile) -> PlayerId {
///         state.to_move
///     }
///     fn legal_plays(&self, history: &[Pile]) -> Vec<u8> {
///         let left = history.last().map_or(0, |s| s.left);
///         (1..=2).filter(|&n| n <= left).collect()
///     }
///     fn next_state(&self, state: &Pile, take: &u8) -> Pile {
///         Pile {
///             left: state.left - take,
///             to_move: state.to_move.opponent(),
///             last: Some(state.to_move),
///         }
///     }
///     fn winner(&self, history: &[Pile]) -> Winner {
///         match history.last() {
///             Some(Pile { left: 0, last: Some(p), .. }) => Winner::Player(*p),
///             _ => Winner::Undecided,
///         }
///     }
/// }
///
/// let nim = Nim;
/// let start = Pile { left: 2, to_move: PlayerId::ONE, last: None };
/// assert_eq!(nim.legal_plays(&[start.clone()]), vec![1, 2]);
/// let done = nim.next_state(&start, &2);
/// assert_eq!(nim.winner(&[start, done]), Winner::Player(PlayerId::ONE));
/// ```
pub trait Board: Debug {
    /// Game position. Must be a pure value: equal states are interchangeable.
    type State: Clone + Eq + Hash + Debug;

    /// Game action.
    type Move: Clone + PartialEq + Debug;

    /// Produce an initial position.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source for games that randomize the first mover
    fn start(&self, rng: &mut ChaCha20Rng) -> Self::State;

    /// Player whose turn it is in `state`.
    fn current_player(&self, state: &Self::State) -> PlayerId;

    /// Legal moves for the position at the end of `history`.
    ///
    /// Most games only look at the last state. The full history is available
    /// for rules that depend on earlier moves.
    ///
    /// # Note
    /// An empty result means the player to move cannot act. The engine treats
    /// that as a drawn game.
    fn legal_plays(&self, history: &[Self::State]) -> Vec<Self::Move>;

    /// Apply `play` to `state`.
    ///
    /// Must be deterministic: the engine memoizes statistics by the returned
    /// state and recomputes it freely.
    fn next_state(&self, state: &Self::State, play: &Self::Move) -> Self::State;

    /// Outcome of the game at the end of `history`.
    fn winner(&self, history: &[Self::State]) -> Winner;
}
