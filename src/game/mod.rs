//! Number hunt core: the difficulty catalog, round state, and pure logic.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
