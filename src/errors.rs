use thiserror::Error;

/// Errors that can occur while building players, filling teams or
/// querying the league
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field cannot be empty: {field}")]
    EmptyField { field: &'static str },

    #[error("Invalid goals count: {0} (must not be negative)")]
    NegativeGoals(i32),

    #[error("Unknown position: {0}")]
    InvalidPosition(String),

    #[error("Player not found")]
    PlayerNotFound,

    /// Raised both for a failed lookup and for registering an absent team,
    /// in which case no name is attached.
    #[error("Team not found{}", name_suffix(.0))]
    TeamNotFound(Option<String>),

    #[error("Team has no players: {0}")]
    TeamHasNoPlayers(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`LeagueError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A player could not be constructed from the given fields
    Validation,
    /// A team or player reference could not be resolved
    NotFound,
    /// A query needed at least one player and found none
    EmptyCollection,
    /// The service configuration could not be loaded
    Configuration,
}

impl LeagueError {
    /// Creates a lookup failure for the named team
    pub fn team_not_found(name: impl Into<String>) -> Self {
        Self::TeamNotFound(Some(name.into()))
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeagueError::MissingField { .. }
            | LeagueError::EmptyField { .. }
            | LeagueError::NegativeGoals(_)
            | LeagueError::InvalidPosition(_) => ErrorKind::Validation,
            LeagueError::PlayerNotFound | LeagueError::TeamNotFound(_) => ErrorKind::NotFound,
            LeagueError::TeamHasNoPlayers(_) => ErrorKind::EmptyCollection,
            LeagueError::Config(_) => ErrorKind::Configuration,
        }
    }
}

fn name_suffix(name: &Option<String>) -> String {
    name.as_deref()
        .map(|name| format!(": {name}"))
        .unwrap_or_default()
}

pub type LeagueResult<T> = Result<T, LeagueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_errors_are_validation() {
        assert_eq!(
            LeagueError::MissingField { field: "name" }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(LeagueError::NegativeGoals(-1).kind(), ErrorKind::Validation);
        assert_eq!(
            LeagueError::EmptyField { field: "city" }.kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn lookup_errors_are_not_found() {
        assert_eq!(LeagueError::PlayerNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(LeagueError::TeamNotFound(None).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn empty_team_is_empty_collection() {
        assert_eq!(
            LeagueError::TeamHasNoPlayers("Time F".to_string()).kind(),
            ErrorKind::EmptyCollection
        );
    }

    #[test]
    fn team_not_found_message() {
        assert_eq!(
            LeagueError::team_not_found("Time Z").to_string(),
            "Team not found: Time Z"
        );
        assert_eq!(LeagueError::TeamNotFound(None).to_string(), "Team not found");
    }

    #[test]
    fn negative_goals_message() {
        assert_eq!(
            LeagueError::NegativeGoals(-2).to_string(),
            "Invalid goals count: -2 (must not be negative)"
        );
    }
}
