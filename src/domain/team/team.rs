use serde::Serialize;

use super::events::TeamEvent;
use crate::domain::player::Player;
use crate::errors::{LeagueError, LeagueResult};

/// Team aggregate root
///
/// A named, ordered roster of players. Players are kept in the order they
/// were added and are never removed.
///
/// # Invariants
/// - Every roster entry is a fully built [`Player`]
/// - Roster order is insertion order
///
/// # Example
/// ```
/// use soccer_league::domain::player::{Player, Position};
/// use soccer_league::domain::team::Team;
///
/// let mut team = Team::new("Time F");
///
/// let player = Player::builder()
///     .with_name("Jogador FA")
///     .with_city("Cidade A")
///     .with_country("Brasil")
///     .with_goals(10)
///     .with_position(Position::Attack)
///     .build()
///     .expect("valid player");
///
/// team.add(player).expect("player added");
/// assert_eq!(team.len(), 1);
///
/// // Created, then PlayerAdded
/// assert_eq!(team.take_events().len(), 2);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    name: String,
    players: Vec<Player>,
    #[serde(skip)]
    pending_events: Vec<TeamEvent>,
}

impl Team {
    /// Creates a new, empty Team aggregate
    ///
    /// Records a Created event, retrievable through [`Team::take_events`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let pending_events = vec![TeamEvent::Created {
            team_name: name.clone(),
        }];

        Self {
            name,
            players: Vec::new(),
            pending_events,
        }
    }

    /// Appends a player to the roster
    ///
    /// Accepts anything convertible into `Option<Player>` so an absent
    /// player can be passed as `None`. The same player may be added more
    /// than once. Records a PlayerAdded event on success.
    ///
    /// # Returns
    /// * `Ok(())` - If the player was appended
    /// * `Err(LeagueError::PlayerNotFound)` - If no player was given
    pub fn add(&mut self, player: impl Into<Option<Player>>) -> LeagueResult<()> {
        let player = player.into().ok_or(LeagueError::PlayerNotFound)?;

        self.pending_events.push(TeamEvent::PlayerAdded {
            team_name: self.name.clone(),
            player_name: player.name().to_string(),
        });
        self.players.push(player);

        Ok(())
    }

    /// Drains the events recorded since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<TeamEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Getters =====

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of players on the roster
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
