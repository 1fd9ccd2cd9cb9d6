//! Child selection during a playout.
//!
//! Two modes:
//! - **Informed**: every candidate already has counters with a non-zero
//!   denominator, so UCB1 (with draws) is comparable across all of them.
//! - **Random**: at least one candidate has no usable counters; pick
//!   uniformly instead of inventing a bonus for unvisited children.

use std::hash::Hash;

use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::config::MctsConfig;
use crate::node::{StatsEntry, StatsKey};
use crate::stats::StatsStore;

/// Which rule picked a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Informed,
    Random,
}

/// UCB1 score with draws.
///
/// `w / den + C * sqrt(log_total / den)` where
/// `den = draws * draw_weight + losses + wins`.
///
/// `log_total` is the natural log of the summed denominators of all
/// siblings, clamped at zero by the caller. `den` must be positive.
#[inline]
pub fn ucb1_score(entry: &StatsEntry, log_total: f64, exploration: f64, draw_weight: f64) -> f64 {
    let den = entry.denominator(draw_weight);
    entry.wins as f64 / den + exploration * (log_total / den).sqrt()
}

/// Choose which of `candidates` the playout moves into.
///
/// Returns the candidate index and the mode that chose it, or `None` when
/// there are no candidates. Among equal informed scores the earliest
/// candidate wins.
pub fn select_candidate<S: Hash + Eq>(
    store: &StatsStore<S>,
    candidates: &[StatsKey<S>],
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Option<(usize, Mode)> {
    if candidates.is_empty() {
        return None;
    }

    match informed_entries(store, candidates, config.draw_weight) {
        Some(entries) => {
            let total: f64 = entries
                .iter()
                .map(|e| e.denominator(config.draw_weight))
                .sum();
            // A total below 1 (only draws seen) would make the log negative
            let log_total = total.ln().max(0.0);

            let mut best = 0;
            let mut best_score = f64::NEG_INFINITY;
            for (i, entry) in entries.iter().enumerate() {
                let score = ucb1_score(entry, log_total, config.exploration, config.draw_weight);
                if score > best_score {
                    best = i;
                    best_score = score;
                }
            }
            Some((best, Mode::Informed))
        }
        None => Some((rng.gen_range(0..candidates.len()), Mode::Random)),
    }
}

/// Counters for every candidate, or `None` if any is absent or has a zero
/// denominator.
fn informed_entries<S: Hash + Eq>(
    store: &StatsStore<S>,
    candidates: &[StatsKey<S>],
    draw_weight: f64,
) -> Option<Vec<StatsEntry>> {
    candidates
        .iter()
        .map(|key| {
            store
                .get(key)
                .copied()
                .filter(|e| e.denominator(draw_weight) > 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::StatField;
    use engine_core::PlayerId;
    use rand::SeedableRng;

    fn store_with(entries: &[(u32, u32, u32, u32)]) -> (StatsStore<u32>, Vec<StatsKey<u32>>) {
        let mut store = StatsStore::new();
        let mut keys = Vec::new();
        for (state, &(wins, losses, draws, plays)) in entries.iter().enumerate() {
            let key = StatsKey::new(PlayerId::ONE, state as u32);
            store.insert_zero(key.clone());
            for (field, n) in [
                (StatField::Wins, wins),
                (StatField::Losses, losses),
                (StatField::Draws, draws),
                (StatField::Plays, plays),
            ] {
                for _ in 0..n {
                    store.increment(&key, field);
                }
            }
            keys.push(key);
        }
        (store, keys)
    }

    #[test]
    fn test_ucb1_score_formula() {
        let entry = StatsEntry {
            plays: 10,
            wins: 3,
            losses: 1,
            draws: 10,
        };
        // den = 10 * 0.1 + 1 + 3 = 5
        let log_total = 20f64.ln();
        let expected = 3.0 / 5.0 + 5.0 * (log_total / 5.0).sqrt();
        assert!((ucb1_score(&entry, log_total, 5.0, 0.1) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_candidates() {
        let store: StatsStore<u32> = StatsStore::new();
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(select_candidate(&store, &[], &MctsConfig::default(), &mut rng).is_none());
    }

    #[test]
    fn test_informed_picks_highest_score() {
        // Same denominators, so the exploration bonus is equal and wins decide
        let (store, keys) = store_with(&[(1, 3, 0, 4), (3, 1, 0, 4), (2, 2, 0, 4)]);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let picked = select_candidate(&store, &keys, &MctsConfig::default(), &mut rng);
        assert_eq!(picked, Some((1, Mode::Informed)));
    }

    #[test]
    fn test_exploration_favors_less_visited() {
        // 10/20 vs 1/2 win rate; only the bonus separates them
        let (store, keys) = store_with(&[(10, 10, 0, 20), (1, 1, 0, 2)]);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let config = MctsConfig::default().with_exploration(1.0);
        assert_eq!(
            select_candidate(&store, &keys, &config, &mut rng),
            Some((1, Mode::Informed))
        );
    }

    #[test]
    fn test_equal_scores_pick_first_candidate() {
        let (store, keys) = store_with(&[(2, 2, 0, 4), (2, 2, 0, 4), (2, 2, 0, 4)]);
        let config = MctsConfig::default();
        for seed in 0..8 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            assert_eq!(
                select_candidate(&store, &keys, &config, &mut rng),
                Some((0, Mode::Informed))
            );
        }
    }

    #[test]
    fn test_absent_candidate_forces_random_mode() {
        let (store, mut keys) = store_with(&[(5, 1, 0, 6), (0, 4, 0, 4)]);
        keys.push(StatsKey::new(PlayerId::ONE, 99));
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let (index, mode) = select_candidate(&store, &keys, &MctsConfig::default(), &mut rng).unwrap();
        assert_eq!(mode, Mode::Random);
        assert!(index < keys.len());
    }

    #[test]
    fn test_zero_denominator_forces_random_mode() {
        // Second entry exists but has only been played, never decided
        let (store, keys) = store_with(&[(5, 1, 0, 6), (0, 0, 0, 3)]);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let (_, mode) = select_candidate(&store, &keys, &MctsConfig::default(), &mut rng).unwrap();
        assert_eq!(mode, Mode::Random);
    }

    #[test]
    fn test_draw_only_candidates_score_without_nan() {
        // total = 0.1 + 0.1 < 1, log clamped to 0
        let (store, keys) = store_with(&[(0, 0, 1, 1), (0, 0, 1, 1)]);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(
            select_candidate(&store, &keys, &MctsConfig::default(), &mut rng),
            Some((0, Mode::Informed))
        );
    }

    #[test]
    fn test_random_mode_covers_all_candidates() {
        let store: StatsStore<u32> = StatsStore::new();
        let keys: Vec<_> = (10u32..13).map(|s| StatsKey::new(PlayerId::TWO, s)).collect();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let (i, mode) = select_candidate(&store, &keys, &MctsConfig::default(), &mut rng).unwrap();
            assert_eq!(mode, Mode::Random);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
