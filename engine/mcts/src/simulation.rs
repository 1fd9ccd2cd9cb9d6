//! One randomized playout plus backpropagation.
//!
//! A playout walks forward from the root position, choosing each ply with
//! [`select_candidate`], expanding at most one new node, and stops on a
//! decided winner, on a position with no legal moves (scored as a tie) or
//! after `max_moves` plies (left undecided). Every visited node that exists
//! in the store then gets its counters updated relative to the reference
//! player.

use std::collections::HashSet;
use std::hash::Hash;

use engine_core::{Board, PlayerId, Winner};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::config::MctsConfig;
use crate::node::{StatField, StatsKey};
use crate::selection::select_candidate;
use crate::stats::StatsStore;

/// What happened during one playout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutSummary {
    /// Final outcome; `Undecided` when the depth cap was reached
    pub outcome: Winner,
    /// Plies actually played
    pub plies: usize,
    /// 1-based ply at which a new node was expanded, if any
    pub expanded_depth: Option<usize>,
    /// Distinct nodes visited
    pub visited: usize,
}

/// Play one simulation from the end of `history` and backpropagate it.
///
/// `reference` is the player whose point of view the outcome counters are
/// recorded from (the player to move at the root of the decision).
pub fn run_simulation<B: Board>(
    board: &B,
    store: &mut StatsStore<B::State>,
    history: &[B::State],
    reference: PlayerId,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> PlayoutSummary {
    let mut playout: Vec<B::State> = history.to_vec();
    let mut visited: HashSet<StatsKey<B::State>> = HashSet::new();
    let mut expanded_depth = None;
    let mut outcome = Winner::Undecided;
    let mut plies = 0;

    let Some(root) = playout.last() else {
        return PlayoutSummary {
            outcome,
            plies,
            expanded_depth,
            visited: 0,
        };
    };
    let mut mover = board.current_player(root);

    for ply in 1..=config.max_moves {
        let legal = board.legal_plays(&playout);
        let Some(state) = playout.last() else {
            break;
        };

        let mut candidates: Vec<StatsKey<B::State>> = legal
            .iter()
            .map(|play| StatsKey::new(mover, board.next_state(state, play)))
            .collect();

        let Some((index, _mode)) = select_candidate(store, &candidates, config, rng) else {
            // Nothing to play: the playout is scored as a draw
            outcome = Winner::Tie;
            break;
        };

        let chosen = candidates.swap_remove(index);
        playout.push(chosen.state.clone());
        plies = ply;

        if expanded_depth.is_none() && store.insert_zero(chosen.clone()) {
            expanded_depth = Some(ply);
        }

        mover = board.current_player(&chosen.state);
        visited.insert(chosen);

        outcome = board.winner(&playout);
        if outcome.is_decided() {
            break;
        }
    }

    backpropagate(store, &visited, outcome, reference);

    trace!(
        plies = plies,
        visited = visited.len(),
        expanded = ?expanded_depth,
        outcome = %outcome,
        "Playout complete"
    );

    PlayoutSummary {
        outcome,
        plies,
        expanded_depth,
        visited: visited.len(),
    }
}

/// Record `outcome` on every visited node present in the store.
///
/// `plays` always increases; `wins`/`losses` are relative to `reference`,
/// `draws` count ties and an undecided playout adds nothing else.
pub fn backpropagate<S: Hash + Eq>(
    store: &mut StatsStore<S>,
    visited: &HashSet<StatsKey<S>>,
    outcome: Winner,
    reference: PlayerId,
) {
    let field = match outcome {
        Winner::Player(p) if p == reference => Some(StatField::Wins),
        Winner::Player(_) => Some(StatField::Losses),
        Winner::Tie => Some(StatField::Draws),
        Winner::Undecided => None,
    };

    for key in visited {
        if store.increment(key, StatField::Plays) {
            if let Some(field) = field {
                store.increment(key, field);
            }
        }
    }
}
