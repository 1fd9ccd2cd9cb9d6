//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by PLAYOUT_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("PLAYOUT_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from PLAYOUT_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "PLAYOUT_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files are logged and replaced by the built-in
/// defaults; environment overrides apply in every case.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, bool, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => $config.$section.$field = v,
            Ok(Err(_)) => warn!("Ignoring unparseable {}", $key),
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: PLAYOUT_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "PLAYOUT_COMMON_LOG_LEVEL");

    // Search
    env_override!(
        config,
        search.time_limit_ms,
        "PLAYOUT_SEARCH_TIME_LIMIT_MS",
        parse
    );
    env_override!(
        config,
        search.max_iterations,
        "PLAYOUT_SEARCH_MAX_ITERATIONS",
        parse
    );
    env_override!(config, search.max_moves, "PLAYOUT_SEARCH_MAX_MOVES", parse);
    env_override!(
        config,
        search.exploration,
        "PLAYOUT_SEARCH_EXPLORATION",
        parse
    );
    env_override!(
        config,
        search.draw_weight,
        "PLAYOUT_SEARCH_DRAW_WEIGHT",
        parse
    );
    env_override!(
        config,
        search.ranking_epsilon,
        "PLAYOUT_SEARCH_RANKING_EPSILON",
        parse
    );
    env_override!(
        config,
        search.reuse_statistics,
        "PLAYOUT_SEARCH_REUSE_STATISTICS",
        parse
    );
    env_override!(config, search.seed, "PLAYOUT_SEARCH_SEED", parse);

    // Arena
    env_override!(config, arena.games, "PLAYOUT_ARENA_GAMES", parse);
    env_override!(config, arena.max_plies, "PLAYOUT_ARENA_MAX_PLIES", parse);
    env_override!(config, arena.seed, "PLAYOUT_ARENA_SEED", parse);

    config
}
