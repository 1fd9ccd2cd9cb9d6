//! Default configuration values loaded from config.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time,
//! so every component starts from identical values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    time_limit_ms: u64,
    max_iterations: u32,
    max_moves: usize,
    exploration: f64,
    draw_weight: f64,
    ranking_epsilon: f64,
    reuse_statistics: bool,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    max_plies: usize,
    seed: u64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Search
pub fn time_limit_ms() -> u64 {
    DEFAULTS.search.time_limit_ms
}
pub fn max_iterations() -> u32 {
    DEFAULTS.search.max_iterations
}
pub fn max_moves() -> usize {
    DEFAULTS.search.max_moves
}
pub fn exploration() -> f64 {
    DEFAULTS.search.exploration
}
pub fn draw_weight() -> f64 {
    DEFAULTS.search.draw_weight
}
pub fn ranking_epsilon() -> f64 {
    DEFAULTS.search.ranking_epsilon
}
pub fn reuse_statistics() -> bool {
    DEFAULTS.search.reuse_statistics
}
pub fn search_seed() -> u64 {
    DEFAULTS.search.seed
}

// Arena
pub fn arena_games() -> u32 {
    DEFAULTS.arena.games
}
pub fn arena_max_plies() -> usize {
    DEFAULTS.arena.max_plies
}
pub fn arena_seed() -> u64 {
    DEFAULTS.arena.seed
}
