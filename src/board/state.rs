//! Simulation lifecycle and the per-turn snapshot.
//!
//! `SimState` is the snapshot the move policies read and the resolver
//! mutates; one exists per turn boundary. `RunState` is the host-facing
//! lifecycle gate: only a running game advances.

use std::fmt;

use thiserror::Error;

use super::grid::{Grid, Scores};
use super::position::Position;
use super::team::{Team, ALL_TEAMS};

/// The rule phase of the contest.
///
/// Monotonic: once `Conflict` is entered the engine never returns to
/// `Expansion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Expansion,
    Conflict,
}

impl GamePhase {
    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            GamePhase::Expansion => "Expansion",
            GamePhase::Conflict => "Conflict",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host-facing lifecycle state. Gates whether a turn advance has any effect;
/// the simulation rules themselves never read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Finished,
}

impl RunState {
    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
            RunState::Finished => "Finished",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A violated engine invariant.
///
/// These are programming errors surfaced by tests and debug assertions,
/// never runtime conditions to recover from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{team} score is {recorded} but owned cells sum to {actual}")]
    ScoreMismatch {
        team: Team,
        recorded: u32,
        actual: u32,
    },

    #[error("unowned cell {pos} holds {points} points")]
    StrandedPoints { pos: Position, points: u32 },

    #[error("cell {pos} is owned but holds no points")]
    OwnedWithoutPoints { pos: Position },
}

/// Complete simulation state at a turn boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimState {
    pub grid: Grid,
    pub scores: Scores,
    pub phase: GamePhase,
    pub turn: u32,
}

impl SimState {
    /// The start-of-game state: corner seeds placed, expansion phase, turn 0.
    pub fn initial() -> SimState {
        SimState {
            grid: Grid::seeded(),
            scores: Scores::initial(),
            phase: GamePhase::Expansion,
            turn: 0,
        }
    }

    /// Checks the cell-consistency and score-sum invariants.
    ///
    /// A sacrificed attacker cell is set to `(None, 0)` in the same mutation
    /// that strips its owner, so no reachable state may pair an absent owner
    /// with a positive point value.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (pos, cell) in self.grid.iter() {
            match cell.owner {
                None if cell.points > 0 => {
                    return Err(InvariantViolation::StrandedPoints {
                        pos,
                        points: cell.points,
                    });
                }
                Some(_) if cell.points == 0 => {
                    return Err(InvariantViolation::OwnedWithoutPoints { pos });
                }
                _ => {}
            }
        }

        for &team in &ALL_TEAMS {
            let actual = self.grid.points_total(team);
            let recorded = self.scores.get(team);
            if recorded != actual {
                return Err(InvariantViolation::ScoreMismatch {
                    team,
                    recorded,
                    actual,
                });
            }
        }

        Ok(())
    }
}
