//! Player identities and game outcomes shared by every board.
//!
//! Boards report outcomes with [`Winner`]. The integer convention used by
//! plain-data boards (0 = undecided, positive = winning player, negative = tie)
//! maps onto it through [`Winner::from_code`] and [`Winner::code`].

use std::fmt;

/// Identity of a player. Always positive; players are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(1);
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a player id. Returns `None` for 0, which is reserved for
    /// "no player".
    pub const fn new(id: u8) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Raw numeric id (always >= 1).
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The other seat in a two-player game.
    ///
    /// Player 1 maps to player 2 and every other id maps to player 1.
    #[inline]
    pub const fn opponent(self) -> Self {
        if self.0 == 1 {
            Self::TWO
        } else {
            Self::ONE
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of asking a board whether a game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    /// Game still in progress (or abandoned at a depth cap).
    #[default]
    Undecided,
    /// Game won by the given player.
    Player(PlayerId),
    /// Game finished without a winner.
    Tie,
}

impl Winner {
    /// Integer code used for ties.
    pub const TIE_CODE: i32 = -1;

    /// Decode the integer convention: 0 = undecided, positive = player,
    /// any negative value = tie. Positive values above `u8::MAX` saturate.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Winner::Undecided,
            c if c < 0 => Winner::Tie,
            c => Winner::Player(PlayerId(c.min(u8::MAX as i32) as u8)),
        }
    }

    /// Encode back to the integer convention.
    pub fn code(self) -> i32 {
        match self {
            Winner::Undecided => 0,
            Winner::Player(p) => p.get() as i32,
            Winner::Tie => Self::TIE_CODE,
        }
    }

    /// True for a win or a tie.
    #[inline]
    pub fn is_decided(self) -> bool {
        !matches!(self, Winner::Undecided)
    }

    /// The winning player, if any.
    #[inline]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Winner::Player(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Undecided => write!(f, "undecided"),
            Winner::Player(p) => write!(f, "player {}", p),
            Winner::Tie => write!(f, "tie"),
        }
    }
}
