use serde::Serialize;

use super::builder::PlayerBuilder;
use super::value_objects::Position;

/// A player registered with a team
///
/// Immutable once built; all fields are validated by [`PlayerBuilder`].
///
/// # Invariants
/// - Name, city and country are non-empty
/// - Goals are never negative
///
/// # Example
/// ```
/// use soccer_league::domain::player::{Player, Position};
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
/// assert_eq!(player.name(), "Jogador FA");
/// assert_eq!(player.goals(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    city: String,
    country: String,
    goals: u32,
    position: Position,
}

impl Player {
    /// Starts building a new player
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Assembles a player from already validated parts
    pub(super) fn from_parts(
        name: String,
        city: String,
        country: String,
        goals: u32,
        position: Position,
    ) -> Self {
        Self {
            name,
            city,
            country,
            goals,
            position,
        }
    }

    // ===== Getters =====

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's home city
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the player's country
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the number of goals scored
    pub fn goals(&self) -> u32 {
        self.goals
    }

    /// Returns the player's position
    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::builder()
            .with_name("Jogador AA")
            .with_city("Cidade A")
            .with_country("Brasil")
            .with_goals(7)
            .with_position(Position::Defense)
            .build()
            .unwrap()
    }

    #[test]
    fn player_getters() {
        let player = player();

        assert_eq!(player.name(), "Jogador AA");
        assert_eq!(player.city(), "Cidade A");
        assert_eq!(player.country(), "Brasil");
        assert_eq!(player.goals(), 7);
        assert_eq!(player.position(), Position::Defense);
    }

    #[test]
    fn player_clone() {
        let player = player();
        assert_eq!(player.clone(), player);
    }

    #[test]
    fn player_serializes_to_json() {
        let value = serde_json::to_value(player()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Jogador AA",
                "city": "Cidade A",
                "country": "Brasil",
                "goals": 7,
                "position": "defense",
            })
        );
    }
}
