/// Domain events that occur within the Team aggregate
///
/// # Example
/// ```
/// use soccer_league::domain::team::TeamEvent;
///
/// let event = TeamEvent::PlayerAdded {
///     team_name: "Time A".to_string(),
///     player_name: "Jogador AA".to_string(),
/// };
/// assert_eq!(event.team_name(), "Time A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        /// Name of the newly created team
        team_name: String,
    },
    /// Fired when a player joins a team
    PlayerAdded {
        /// Name of the team the player joined
        team_name: String,
        /// Name of the player
        player_name: String,
    },
}

impl TeamEvent {
    /// Returns the name of the team this event belongs to
    pub fn team_name(&self) -> &str {
        match self {
            TeamEvent::Created { team_name } => team_name,
            TeamEvent::PlayerAdded { team_name, .. } => team_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_created_event() {
        let event = TeamEvent::Created {
            team_name: "Time A".to_string(),
        };

        assert_eq!(event.team_name(), "Time A");
    }

    #[test]
    fn player_added_event() {
        let event = TeamEvent::PlayerAdded {
            team_name: "Time B".to_string(),
            player_name: "Jogador BA".to_string(),
        };

        assert_eq!(event.team_name(), "Time B");
    }
}
