use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::LeagueError;

/// On-field role of a player
///
/// The set is closed. Ordering follows declaration order so positions can
/// key ordered maps.
///
/// # Example
/// ```
/// use soccer_league::domain::player::value_objects::Position;
///
/// let position: Position = "goalkeeper".parse().expect("known position");
/// assert_eq!(position, Position::Goalkeeper);
/// assert_eq!(position.to_string(), "goalkeeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Forwards and attacking midfielders
    Attack,
    /// Defenders
    Defense,
    /// Goalkeeper
    Goalkeeper,
}

impl Position {
    /// All positions, in order
    pub const ALL: [Position; 3] = [Position::Attack, Position::Defense, Position::Goalkeeper];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Attack => write!(f, "attack"),
            Position::Defense => write!(f, "defense"),
            Position::Goalkeeper => write!(f, "goalkeeper"),
        }
    }
}

impl FromStr for Position {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Position::Attack),
            "defense" => Ok(Position::Defense),
            "goalkeeper" => Ok(Position::Goalkeeper),
            _ => Err(LeagueError::InvalidPosition(s.to_string())),
        }
    }
}
