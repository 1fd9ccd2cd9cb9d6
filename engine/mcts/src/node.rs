//! Statistics node representation.
//!
//! The search tree is never materialized. A node is identified by the
//! position a move led to together with the player who made that move, and
//! its counters live in a flat [`StatsStore`](crate::stats::StatsStore).
//! Children are recomputed on demand through the board's transition function.

use engine_core::PlayerId;

/// Identity of a node: the player who moved into `state`, and `state` itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsKey<S> {
    pub mover: PlayerId,
    pub state: S,
}

impl<S> StatsKey<S> {
    pub fn new(mover: PlayerId, state: S) -> Self {
        Self { mover, state }
    }
}

/// Counters accumulated for one node.
///
/// Outcome counters are recorded from the point of view of the player to
/// move at the root of the decision that produced them, not from the
/// point of view of `StatsKey::mover`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsEntry {
    /// Simulations that passed through this node after it was expanded
    pub plays: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// Counter selector for [`StatsStore::increment`](crate::stats::StatsStore::increment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Plays,
    Wins,
    Losses,
    Draws,
}

impl StatsEntry {
    /// Weighted number of decided outcomes: `draws * draw_weight + losses + wins`.
    ///
    /// Used both as the UCB1 denominator and as the contribution of this
    /// entry to the log total of its siblings.
    #[inline]
    pub fn denominator(&self, draw_weight: f64) -> f64 {
        self.draws as f64 * draw_weight + self.losses as f64 + self.wins as f64
    }

    /// Exploitation-only score used to pick the final move:
    /// `wins / (epsilon + losses + wins + draw_weight * wins)`.
    ///
    /// An all-zero entry scores 0.
    #[inline]
    pub fn ranking_score(&self, draw_weight: f64, epsilon: f64) -> f64 {
        let wins = self.wins as f64;
        wins / (epsilon + self.losses as f64 + wins + draw_weight * wins)
    }

    /// Number of decided outcomes (unweighted).
    #[inline]
    pub fn decided(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    #[inline]
    pub(crate) fn bump(&mut self, field: StatField) {
        match field {
            StatField::Plays => self.plays += 1,
            StatField::Wins => self.wins += 1,
            StatField::Losses => self.losses += 1,
            StatField::Draws => self.draws += 1,
        }
    }
}
