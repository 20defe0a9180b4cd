//! # Connect Four
//!
//! A two-player Connect Four engine. Players alternately drop discs into a
//! 7×6 grid; the engine enforces gravity, detects four in a row through the
//! last disc, and reports wins and draws. Rendering and input belong to
//! whatever presentation layer drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
