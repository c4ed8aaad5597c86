//! # Bridgit
//!
//! Connectivity engine for Bridg-It, a two-player connection game on an odd
//! square grid. Each player claims link slots between their own anchors and
//! wins by joining their two opposite borders.
//!
//! ## Modules
//!
//! - [`game`]: Grid, cells, link placement, BFS win detection, game state
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
