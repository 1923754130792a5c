//! Gridwar engine library.
//!
//! Exposes the board representation, candidate generation, move resolution,
//! turn orchestration, and batch simulation modules for use by the binaries
//! and integration tests.

pub mod board;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod simulate;
