//! Board representation and game-state types.
//!
//! Contains the core data structures for teams, coordinates, cells, scores,
//! and the per-turn simulation snapshot.

pub mod grid;
pub mod position;
pub mod state;
pub mod team;

pub use grid::{Cell, Grid, Scores, BLUE_START, INITIAL_POINTS, RED_START};
pub use position::{all_positions, Position, CELL_COUNT, GRID_SIZE};
pub use state::{GamePhase, InvariantViolation, RunState, SimState};
pub use team::{Team, ALL_TEAMS, TEAM_COUNT};
