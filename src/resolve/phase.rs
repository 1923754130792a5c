//! Phase transitions and termination detection.
//!
//! The phase machine is monotonic: expansion ends when neither team can
//! claim, and the contest ends when neither team has any conflict move.

use crate::board::{Grid, Scores, Team, ALL_TEAMS};
use crate::movegen::{
    attack_candidates, consolidation_candidates, expansion_candidates, reclaim_candidates,
};

/// Returns true while either team still has an empty cell to claim.
pub fn expansion_open(grid: &Grid) -> bool {
    ALL_TEAMS
        .iter()
        .any(|&team| !expansion_candidates(team, grid).is_empty())
}

/// Returns true if `team` has any attack, reclaim, or consolidation
/// available.
pub fn team_has_move(team: Team, grid: &Grid) -> bool {
    !attack_candidates(team, grid).is_empty()
        || !reclaim_candidates(team, grid).is_empty()
        || !consolidation_candidates(team, grid).is_empty()
}

/// Returns true when neither team has a conflict move: the terminal
/// stalemate.
pub fn is_stalemate(grid: &Grid) -> bool {
    ALL_TEAMS.iter().all(|&team| !team_has_move(team, grid))
}

/// The team with the strictly higher score. Ties have no winner.
pub fn winner(scores: &Scores) -> Option<Team> {
    scores.leader()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Position, GRID_SIZE};

    fn filled_grid(team: Team, points: u32) -> Grid {
        let mut grid = Grid::empty();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                grid.set(Position::new(row, col), Cell::owned(team, points));
            }
        }
        grid
    }

    #[test]
    fn expansion_open_on_seeded_grid() {
        assert!(expansion_open(&Grid::seeded()));
    }

    #[test]
    fn expansion_closed_on_full_grid() {
        assert!(!expansion_open(&filled_grid(Team::Blue, 1)));
    }

    #[test]
    fn expansion_closed_without_owned_territory() {
        // No owned cells means no candidates, even with the grid wide open.
        assert!(!expansion_open(&Grid::empty()));
    }

    #[test]
    fn single_point_cells_have_no_moves() {
        let grid = filled_grid(Team::Blue, 1);
        assert!(!team_has_move(Team::Blue, &grid));
        assert!(!team_has_move(Team::Red, &grid));
        assert!(is_stalemate(&grid));
    }

    #[test]
    fn stalemate_broken_by_a_reclaimable_cell() {
        let mut grid = Grid::empty();
        grid.set(Position::new(5, 5), Cell::owned(Team::Blue, 2));
        assert!(team_has_move(Team::Blue, &grid));
        assert!(!team_has_move(Team::Red, &grid));
        assert!(!is_stalemate(&grid));
    }

    #[test]
    fn stalemate_broken_by_an_attack() {
        let mut grid = filled_grid(Team::Blue, 1);
        grid.set(Position::new(0, 0), Cell::owned(Team::Red, 3));
        // Red outpoints every Blue neighbor; Blue has no move of its own.
        assert!(team_has_move(Team::Red, &grid));
        assert!(!is_stalemate(&grid));
    }

    #[test]
    fn winner_is_score_leader() {
        let mut grid = Grid::seeded();
        grid.set(Position::new(4, 4), Cell::owned(Team::Red, 2));
        let scores = Scores::recompute(&grid);
        assert_eq!(winner(&scores), Some(Team::Red));
        assert_eq!(winner(&Scores::initial()), None);
    }
}
