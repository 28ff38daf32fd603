//! Hunch - Terminal Number-Guessing Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod game;
pub mod input;
pub mod session;
