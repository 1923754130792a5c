//! Expansion-phase candidate generation.
//!
//! While the contest is in the expansion phase, each team claims one empty
//! cell orthogonally adjacent to its territory per turn, chosen uniformly at
//! random from its deduplicated candidate set.

use rand::Rng;

use crate::board::{Grid, Position, Team, CELL_COUNT};

/// Collects every empty cell adjacent to `team` territory.
///
/// The scan is row-major over owned cells with neighbors visited in their
/// fixed order; a cell bordered by several same-team cells is recorded once,
/// at its first sighting. The resulting ordering is stable, which keeps
/// seeded picks reproducible.
pub fn expansion_candidates(team: Team, grid: &Grid) -> Vec<Position> {
    let mut seen = [false; CELL_COUNT];
    let mut candidates = Vec::new();

    for (pos, cell) in grid.iter() {
        if !cell.is_owned_by(team) {
            continue;
        }
        for n in pos.neighbors() {
            if grid.cell(n).is_empty() && !seen[n.index()] {
                seen[n.index()] = true;
                candidates.push(n);
            }
        }
    }

    candidates
}

/// Picks one expansion target uniformly at random, or `None` when the team
/// has no reachable empty neighbor. Randomness is consumed only when the
/// candidate set is non-empty.
pub fn pick_expansion(team: Team, grid: &Grid, rng: &mut impl Rng) -> Option<Position> {
    let candidates = expansion_candidates(team, grid);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, BLUE_START, GRID_SIZE, RED_START};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn seed_corners_have_two_candidates_each() {
        let grid = Grid::seeded();

        let blue = expansion_candidates(Team::Blue, &grid);
        assert_eq!(
            blue,
            vec![
                Position::new(BLUE_START.row - 1, BLUE_START.col),
                Position::new(BLUE_START.row, BLUE_START.col + 1),
            ]
        );

        let red = expansion_candidates(Team::Red, &grid);
        assert_eq!(
            red,
            vec![
                Position::new(RED_START.row + 1, RED_START.col),
                Position::new(RED_START.row, RED_START.col - 1),
            ]
        );
    }

    #[test]
    fn candidates_are_deduplicated() {
        // Two Blue cells share the empty neighbor (5, 5).
        let mut grid = Grid::empty();
        grid.set(Position::new(4, 5), Cell::owned(Team::Blue, 5));
        grid.set(Position::new(6, 5), Cell::owned(Team::Blue, 5));

        let candidates = expansion_candidates(Team::Blue, &grid);
        let shared = candidates
            .iter()
            .filter(|p| **p == Position::new(5, 5))
            .count();
        assert_eq!(shared, 1);
    }

    #[test]
    fn full_grid_has_no_candidates() {
        let mut grid = Grid::empty();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                grid.set(Position::new(row, col), Cell::owned(Team::Blue, 1));
            }
        }
        assert!(expansion_candidates(Team::Blue, &grid).is_empty());
        assert!(expansion_candidates(Team::Red, &grid).is_empty());
    }

    #[test]
    fn enemy_cells_are_not_candidates() {
        let mut grid = Grid::empty();
        grid.set(Position::new(5, 5), Cell::owned(Team::Blue, 5));
        grid.set(Position::new(5, 6), Cell::owned(Team::Red, 5));

        let candidates = expansion_candidates(Team::Blue, &grid);
        assert!(!candidates.contains(&Position::new(5, 6)));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn pick_is_deterministic_under_seed() {
        let grid = Grid::seeded();
        let a = pick_expansion(Team::Blue, &grid, &mut SmallRng::seed_from_u64(9));
        let b = pick_expansion(Team::Blue, &grid, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn pick_returns_none_without_candidates() {
        let grid = Grid::empty();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(pick_expansion(Team::Blue, &grid, &mut rng), None);
    }
}
