//! Conflict-phase candidate generation and move selection.
//!
//! Three move classes are evaluated in strict priority order: attack, then
//! reclaim, then consolidation. The first class with any candidate supplies
//! the team's move for the turn; selection within a class is uniform.

use rand::Rng;

use crate::board::{Grid, Position, Team};

/// An attack pair: the cell at `from` is sacrificed to capture the enemy
/// cell at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackMove {
    pub from: Position,
    pub to: Position,
}

/// A reclaim pair: points move from `from` into the unowned cell at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReclaimMove {
    pub from: Position,
    pub to: Position,
}

/// A consolidation source together with its same-team neighbor targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidationCandidate {
    pub from: Position,
    pub targets: Vec<Position>,
}

/// The move chosen for a team's slot in a conflict turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictMove {
    Attack { from: Position, to: Position },
    Reclaim { from: Position, to: Position },
    Consolidate { from: Position, to: Position },
}

/// Every (owned, enemy-neighbor) pair where the attacker strictly outpoints
/// the defender.
pub fn attack_candidates(team: Team, grid: &Grid) -> Vec<AttackMove> {
    let opponent = team.opponent();
    let mut candidates = Vec::new();

    for (pos, cell) in grid.iter() {
        if !cell.is_owned_by(team) {
            continue;
        }
        for n in pos.neighbors() {
            let target = grid.cell(n);
            if target.is_owned_by(opponent) && cell.points > target.points {
                candidates.push(AttackMove { from: pos, to: n });
            }
        }
    }

    candidates
}

/// Every (owned with points > 1, unowned-neighbor) pair.
pub fn reclaim_candidates(team: Team, grid: &Grid) -> Vec<ReclaimMove> {
    let mut candidates = Vec::new();

    for (pos, cell) in grid.iter() {
        if !cell.is_owned_by(team) || cell.points <= 1 {
            continue;
        }
        for n in pos.neighbors() {
            if grid.cell(n).is_empty() {
                candidates.push(ReclaimMove { from: pos, to: n });
            }
        }
    }

    candidates
}

/// Every cell with points > 1 that has at least one same-team neighbor,
/// paired with all such neighbors.
pub fn consolidation_candidates(team: Team, grid: &Grid) -> Vec<ConsolidationCandidate> {
    let mut candidates = Vec::new();

    for (pos, cell) in grid.iter() {
        if !cell.is_owned_by(team) || cell.points <= 1 {
            continue;
        }
        let targets: Vec<Position> = pos
            .neighbors()
            .into_iter()
            .filter(|&n| grid.cell(n).is_owned_by(team))
            .collect();
        if !targets.is_empty() {
            candidates.push(ConsolidationCandidate { from: pos, targets });
        }
    }

    candidates
}

/// Ordered rule list: the first non-empty class wins, with a uniform pick
/// within it.
///
/// Consolidation consumes two draws: the source among cells that have a
/// same-team neighbor, then the destination among that source's same-team
/// neighbors. Randomness is consumed only for non-empty candidate lists.
pub fn select_move(team: Team, grid: &Grid, rng: &mut impl Rng) -> Option<ConflictMove> {
    let attacks = attack_candidates(team, grid);
    if !attacks.is_empty() {
        let a = attacks[rng.gen_range(0..attacks.len())];
        return Some(ConflictMove::Attack {
            from: a.from,
            to: a.to,
        });
    }

    let reclaims = reclaim_candidates(team, grid);
    if !reclaims.is_empty() {
        let r = reclaims[rng.gen_range(0..reclaims.len())];
        return Some(ConflictMove::Reclaim {
            from: r.from,
            to: r.to,
        });
    }

    let consolidations = consolidation_candidates(team, grid);
    if !consolidations.is_empty() {
        let c = &consolidations[rng.gen_range(0..consolidations.len())];
        let to = c.targets[rng.gen_range(0..c.targets.len())];
        return Some(ConflictMove::Consolidate { from: c.from, to });
    }

    None
}
