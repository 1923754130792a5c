//! Move application and score bookkeeping.
//!
//! Each function applies exactly one executed move to the state, keeping the
//! per-team score totals equal to the sum of owned cell points.

use crate::board::{Cell, Position, SimState, Team, INITIAL_POINTS};

/// Claims an empty cell during expansion.
pub fn apply_claim(state: &mut SimState, team: Team, pos: Position) {
    state.grid.set(pos, Cell::owned(team, INITIAL_POINTS));
    state.scores.add(team, INITIAL_POINTS);
}

/// Resolves an attack: the defender's cell changes hands at the point
/// difference and the attacker's cell is consumed, not merely depleted.
///
/// Both totals drop by the defender's value: the defender loses the cell
/// outright, and the attacker trades `P1` on the source for `P1 - P2` on the
/// target. Candidates guarantee `P1 > P2`, so the captured cell keeps at
/// least one point.
pub fn apply_attack(state: &mut SimState, team: Team, from: Position, to: Position) {
    let attacker = state.grid.cell(from);
    let defender = state.grid.cell(to);

    state.grid.set(to, Cell::owned(team, attacker.points - defender.points));
    state.grid.set(from, Cell::EMPTY);

    state.scores.subtract(team, defender.points);
    state.scores.subtract(team.opponent(), defender.points);
}

/// Resolves a reclaim: the source keeps exactly 1 point and the remainder
/// founds the team's ownership of the unowned target. Score totals are
/// untouched since the points stay with the team.
///
/// Returns the moved amount, or `None` when it would not be strictly
/// positive; the `points > 1` candidate filter makes that unreachable, and
/// the slot then resolves as no move.
pub fn apply_reclaim(state: &mut SimState, team: Team, from: Position, to: Position) -> Option<u32> {
    let source = state.grid.cell(from);
    let moved = source.points.saturating_sub(1);
    if moved == 0 {
        return None;
    }

    state.grid.set(from, Cell::owned(team, 1));
    state.grid.set(to, Cell::owned(team, moved));
    Some(moved)
}

/// Resolves a consolidation: the source keeps exactly 1 point and the
/// remainder is added onto the same-team destination's existing value.
///
/// Same moved-amount guard as reclaim.
pub fn apply_consolidation(
    state: &mut SimState,
    team: Team,
    from: Position,
    to: Position,
) -> Option<u32> {
    let source = state.grid.cell(from);
    let moved = source.points.saturating_sub(1);
    if moved == 0 {
        return None;
    }

    let dest = state.grid.cell(to);
    state.grid.set(from, Cell::owned(team, 1));
    state.grid.set(to, Cell::owned(team, dest.points + moved));
    Some(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GamePhase, Grid, Scores};

    fn conflict_state() -> SimState {
        SimState {
            grid: Grid::empty(),
            scores: Scores::recompute(&Grid::empty()),
            phase: GamePhase::Conflict,
            turn: 0,
        }
    }

    fn place(state: &mut SimState, team: Team, pos: Position, points: u32) {
        state.grid.set(pos, Cell::owned(team, points));
        state.scores.add(team, points);
    }

    #[test]
    fn claim_sets_owner_points_and_score() {
        let mut state = SimState::initial();
        let pos = Position::new(8, 0);
        apply_claim(&mut state, Team::Blue, pos);

        assert_eq!(state.grid.cell(pos), Cell::owned(Team::Blue, INITIAL_POINTS));
        assert_eq!(state.scores.get(Team::Blue), INITIAL_POINTS * 2);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn attack_consumes_source_and_captures_target() {
        let mut state = conflict_state();
        let from = Position::new(5, 5);
        let to = Position::new(5, 6);
        place(&mut state, Team::Blue, from, 3);
        place(&mut state, Team::Red, to, 1);

        apply_attack(&mut state, Team::Blue, from, to);

        assert_eq!(state.grid.cell(from), Cell::EMPTY);
        assert_eq!(state.grid.cell(to), Cell::owned(Team::Blue, 2));
        assert_eq!(state.scores.get(Team::Blue), 2);
        assert_eq!(state.scores.get(Team::Red), 0);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn attack_captured_cell_keeps_at_least_one_point() {
        let mut state = conflict_state();
        let from = Position::new(2, 2);
        let to = Position::new(2, 3);
        place(&mut state, Team::Red, from, 6);
        place(&mut state, Team::Blue, to, 5);

        apply_attack(&mut state, Team::Red, from, to);
        assert_eq!(state.grid.cell(to), Cell::owned(Team::Red, 1));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn reclaim_moves_all_but_one_point() {
        let mut state = conflict_state();
        let from = Position::new(5, 5);
        let to = Position::new(5, 6);
        place(&mut state, Team::Blue, from, 4);

        let moved = apply_reclaim(&mut state, Team::Blue, from, to);

        assert_eq!(moved, Some(3));
        assert_eq!(state.grid.cell(from), Cell::owned(Team::Blue, 1));
        assert_eq!(state.grid.cell(to), Cell::owned(Team::Blue, 3));
        assert_eq!(state.scores.get(Team::Blue), 4);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn reclaim_guard_rejects_single_point_source() {
        let mut state = conflict_state();
        let from = Position::new(5, 5);
        let to = Position::new(5, 6);
        place(&mut state, Team::Blue, from, 1);

        let before = state.clone();
        assert_eq!(apply_reclaim(&mut state, Team::Blue, from, to), None);
        assert_eq!(state, before);
    }

    #[test]
    fn consolidation_accumulates_onto_destination() {
        let mut state = conflict_state();
        let from = Position::new(5, 5);
        let to = Position::new(5, 6);
        place(&mut state, Team::Blue, from, 4);
        place(&mut state, Team::Blue, to, 2);

        let moved = apply_consolidation(&mut state, Team::Blue, from, to);

        assert_eq!(moved, Some(3));
        assert_eq!(state.grid.cell(from), Cell::owned(Team::Blue, 1));
        assert_eq!(state.grid.cell(to), Cell::owned(Team::Blue, 5));
        assert_eq!(state.scores.get(Team::Blue), 6);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn consolidation_guard_rejects_single_point_source() {
        let mut state = conflict_state();
        let from = Position::new(5, 5);
        let to = Position::new(5, 6);
        place(&mut state, Team::Blue, from, 1);
        place(&mut state, Team::Blue, to, 2);

        let before = state.clone();
        assert_eq!(apply_consolidation(&mut state, Team::Blue, from, to), None);
        assert_eq!(state, before);
    }
}
