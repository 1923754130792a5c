//! Candidate move generation.
//!
//! Pure scans over a grid snapshot producing the per-team candidate sets for
//! the current phase. Selection within a class is uniform, driven by an
//! injected randomness source so turns replay deterministically under test.

pub mod conflict;
pub mod expansion;

pub use conflict::{
    attack_candidates, consolidation_candidates, reclaim_candidates, select_move, AttackMove,
    ConflictMove, ConsolidationCandidate, ReclaimMove,
};
pub use expansion::{expansion_candidates, pick_expansion};
