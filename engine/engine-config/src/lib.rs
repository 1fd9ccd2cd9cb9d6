//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across all Playout components (search, arena).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`PLAYOUT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! PLAYOUT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     PLAYOUT_COMMON_LOG_LEVEL=debug
//!     PLAYOUT_SEARCH_TIME_LIMIT_MS=250
//!     PLAYOUT_SEARCH_EXPLORATION=10
//!     PLAYOUT_ARENA_GAMES=20
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
