//! Turn orchestration.
//!
//! `Game` owns the simulation snapshot and the host-facing run-state
//! machine. Each advance computes one full turn synchronously from the prior
//! snapshot and emits one event string per state-changing action.

use rand::Rng;

use crate::board::{GamePhase, Grid, Position, RunState, Scores, SimState, Team};
use crate::movegen::{pick_expansion, select_move, ConflictMove};
use crate::resolve::{
    apply_attack, apply_claim, apply_consolidation, apply_reclaim, expansion_open, is_stalemate,
};

/// Holds the mutable simulation state between turns.
#[derive(Debug, Clone)]
pub struct Game {
    state: SimState,
    run_state: RunState,
}

impl Game {
    /// Creates an idle game on the seeded start-of-game snapshot.
    pub fn new() -> Game {
        Game {
            state: SimState::initial(),
            run_state: RunState::Idle,
        }
    }

    /// Positions the game on an arbitrary snapshot, leaving it idle.
    pub fn from_state(state: SimState) -> Game {
        Game {
            state,
            run_state: RunState::Idle,
        }
    }

    /// The current grid snapshot.
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// The current score totals.
    pub fn scores(&self) -> Scores {
        self.state.scores
    }

    /// The current rule phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// The current lifecycle state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// The number of turns advanced since the last reset.
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    /// The full simulation snapshot.
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Starts or resumes the simulation. No effect on a finished game.
    pub fn start(&mut self) {
        if matches!(self.run_state, RunState::Idle | RunState::Paused) {
            self.run_state = RunState::Running;
        }
    }

    /// Pauses a running simulation.
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
        }
    }

    /// Discards all progress and returns to the idle seeded state. Valid
    /// from any state.
    pub fn reset(&mut self) {
        self.state = SimState::initial();
        self.run_state = RunState::Idle;
    }

    /// Advances one turn, returning the event text for each state-changing
    /// action. Non-running games do not advance and return no events.
    pub fn advance_turn(&mut self, rng: &mut impl Rng) -> Vec<String> {
        if self.run_state != RunState::Running {
            return Vec::new();
        }

        self.state.turn += 1;
        let events = match self.state.phase {
            GamePhase::Expansion => self.expansion_turn(rng),
            GamePhase::Conflict => self.conflict_turn(rng),
        };
        debug_assert!(
            self.state.validate().is_ok(),
            "turn {} broke an engine invariant",
            self.state.turn
        );
        events
    }

    /// One expansion turn: both teams attempt a claim.
    ///
    /// Both candidate sets are drawn from the pre-claim snapshot; Blue is
    /// evaluated first, and a Red pick landing on the cell Blue just claimed
    /// is dropped for the turn, not retried.
    fn expansion_turn(&mut self, rng: &mut impl Rng) -> Vec<String> {
        let mut events = Vec::new();

        let blue_pick = pick_expansion(Team::Blue, &self.state.grid, rng);
        let red_pick = pick_expansion(Team::Red, &self.state.grid, rng);

        if let Some(pos) = blue_pick {
            apply_claim(&mut self.state, Team::Blue, pos);
            events.push(claim_event(Team::Blue, pos));
        }
        if let Some(pos) = red_pick {
            if blue_pick != Some(pos) {
                apply_claim(&mut self.state, Team::Red, pos);
                events.push(claim_event(Team::Red, pos));
            }
        }

        if events.is_empty() {
            debug_assert!(!expansion_open(&self.state.grid));
            self.state.phase = GamePhase::Conflict;
            events.push("Expansion Phase Complete. Conflict Phase Begins!".to_string());
        }
        events
    }

    /// One conflict turn: the first team in parity order with an available
    /// move acts; the other team sits the turn out. A turn where neither
    /// team can move finishes the game.
    fn conflict_turn(&mut self, rng: &mut impl Rng) -> Vec<String> {
        let order = if self.state.turn % 2 == 0 {
            [Team::Blue, Team::Red]
        } else {
            [Team::Red, Team::Blue]
        };

        for team in order {
            if let Some(mv) = select_move(team, &self.state.grid, rng) {
                if let Some(event) = self.execute(team, mv) {
                    return vec![event];
                }
                // Guard-rejected move: the slot resolves as no move and the
                // other team gets its chance.
            }
        }

        debug_assert!(is_stalemate(&self.state.grid));
        self.run_state = RunState::Finished;
        vec!["Stalemate. No more moves possible. The simulation has ended.".to_string()]
    }

    /// Applies a chosen move and returns its event text. `None` means the
    /// moved-amount guard rejected the move and nothing changed.
    fn execute(&mut self, team: Team, mv: ConflictMove) -> Option<String> {
        match mv {
            ConflictMove::Attack { from, to } => {
                apply_attack(&mut self.state, team, from, to);
                Some(format!("{} sacrificed {} to capture {}.", team, from, to))
            }
            ConflictMove::Reclaim { from, to } => {
                apply_reclaim(&mut self.state, team, from, to)?;
                Some(format!("{} reclaimed neutral territory at {}.", team, to))
            }
            ConflictMove::Consolidate { from, to } => {
                let moved = apply_consolidation(&mut self.state, team, from, to)?;
                Some(format!(
                    "{} consolidated {} points from {} to {}.",
                    team, moved, from, to
                ))
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn claim_event(team: Team, pos: Position) -> String {
    format!("{} expanded to {}.", team, pos)
}
