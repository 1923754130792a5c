//! Team identities.
//!
//! Exactly two permanent factions compete for the grid. The `#[repr(u8)]`
//! attribute enables use as an array index.

use std::fmt;

use serde::Serialize;

/// The number of competing teams.
pub const TEAM_COUNT: usize = 2;

/// One of the two factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Team {
    Blue = 0,
    Red = 1,
}

/// All team variants in index order.
pub const ALL_TEAMS: [Team; TEAM_COUNT] = [Team::Blue, Team::Red];

impl Team {
    /// Returns the other team.
    pub const fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }

    /// Returns the display name used in event text.
    pub const fn name(self) -> &'static str {
        match self {
            Team::Blue => "Blue",
            Team::Red => "Red",
        }
    }

    /// Returns the single-character glyph used in text grid dumps.
    pub const fn glyph(self) -> char {
        match self {
            Team::Blue => 'B',
            Team::Red => 'R',
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
