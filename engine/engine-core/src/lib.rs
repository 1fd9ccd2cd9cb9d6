//! Core traits and types for the Playout game engine
//!
//! This crate provides the only boundary the search engine depends on:
//! - `Board`: rules of a two-player game (start, turn order, legal moves,
//!   transitions, outcome)
//! - `PlayerId`: positive player identity
//! - `Winner`: undecided / won / tied outcome

pub mod board;
pub mod outcome;

// Re-export main types for convenience
pub use board::Board;
pub use outcome::{PlayerId, Winner};
