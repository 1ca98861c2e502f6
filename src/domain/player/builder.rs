use super::player::Player;
use super::value_objects::Position;
use crate::errors::{LeagueError, LeagueResult};

/// Fluent builder for [`Player`]
///
/// Every field is optional until [`PlayerBuilder::build`] runs, which
/// enforces the player invariants.
#[derive(Debug, Clone, Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
    goals: Option<i32>,
    position: Option<Position>,
}

impl PlayerBuilder {
    /// Creates a builder with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the goals count
    ///
    /// Accepts signed values so that a negative count is rejected by
    /// `build` rather than by the type system at the call site.
    pub fn with_goals(mut self, goals: i32) -> Self {
        self.goals = Some(goals);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Validates the accumulated fields and builds the player
    ///
    /// # Returns
    /// * `Ok(Player)` - If every field is set and valid
    /// * `Err(LeagueError::MissingField)` - First unset field, checked in
    ///   the order name, city, country, goals, position
    /// * `Err(LeagueError::EmptyField)` - If name, city or country is empty
    ///   or whitespace only
    /// * `Err(LeagueError::NegativeGoals)` - If goals is below zero
    pub fn build(self) -> LeagueResult<Player> {
        let name = required(self.name, "name")?;
        let city = required(self.city, "city")?;
        let country = required(self.country, "country")?;
        let goals = required(self.goals, "goals")?;
        let position = required(self.position, "position")?;

        for (field, value) in [("name", &name), ("city", &city), ("country", &country)] {
            if value.trim().is_empty() {
                return Err(LeagueError::EmptyField { field });
            }
        }

        let goals = u32::try_from(goals).map_err(|_| LeagueError::NegativeGoals(goals))?;

        Ok(Player::from_parts(name, city, country, goals, position))
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> LeagueResult<T> {
    value.ok_or(LeagueError::MissingField { field })
}
