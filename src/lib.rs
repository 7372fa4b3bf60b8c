//! # Connect Four
//!
//! A two-player Connect Four game: pieces drop into columns of a rectangular
//! grid until someone gets four in a row or the board fills up. Ships with a
//! terminal UI built with Ratatui and a headless scripted mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, seats and players, game session
//! - [`driver`] — Input/renderer traits and the loop that connects them to a session
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod ui;
