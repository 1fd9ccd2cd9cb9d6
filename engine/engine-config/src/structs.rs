//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;
use std::time::Duration;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_time_limit_ms() -> u64 {
    defaults::time_limit_ms()
}
fn d_max_iterations() -> u32 {
    defaults::max_iterations()
}
fn d_max_moves() -> usize {
    defaults::max_moves()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_draw_weight() -> f64 {
    defaults::draw_weight()
}
fn d_ranking_epsilon() -> f64 {
    defaults::ranking_epsilon()
}
fn d_reuse_statistics() -> bool {
    defaults::reuse_statistics()
}
fn d_search_seed() -> u64 {
    defaults::search_seed()
}
fn d_games() -> u32 {
    defaults::arena_games()
}
fn d_max_plies() -> usize {
    defaults::arena_max_plies()
}
fn d_arena_seed() -> u64 {
    defaults::arena_seed()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Move search budget and scoring parameters
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget per decision in milliseconds. 0 disables the limit.
    #[serde(default = "d_time_limit_ms")]
    pub time_limit_ms: u64,
    #[serde(default = "d_max_iterations")]
    pub max_iterations: u32,
    /// Plies per playout before it is abandoned as undecided
    #[serde(default = "d_max_moves")]
    pub max_moves: usize,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    #[serde(default = "d_draw_weight")]
    pub draw_weight: f64,
    #[serde(default = "d_ranking_epsilon")]
    pub ranking_epsilon: f64,
    #[serde(default = "d_reuse_statistics")]
    pub reuse_statistics: bool,
    #[serde(default = "d_search_seed")]
    pub seed: u64,
}

impl SearchConfig {
    /// Time budget as a `Duration`, `None` when disabled.
    pub fn time_limit(&self) -> Option<Duration> {
        if self.time_limit_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.time_limit_ms))
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: defaults::time_limit_ms(),
            max_iterations: defaults::max_iterations(),
            max_moves: defaults::max_moves(),
            exploration: defaults::exploration(),
            draw_weight: defaults::draw_weight(),
            ranking_epsilon: defaults::ranking_epsilon(),
            reuse_statistics: defaults::reuse_statistics(),
            seed: defaults::search_seed(),
        }
    }
}

/// Engine-vs-engine match configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    /// Plies after which a match game is stopped as undecided
    #[serde(default = "d_max_plies")]
    pub max_plies: usize,
    #[serde(default = "d_arena_seed")]
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::arena_games(),
            max_plies: defaults::arena_max_plies(),
            seed: defaults::arena_seed(),
        }
    }
}
