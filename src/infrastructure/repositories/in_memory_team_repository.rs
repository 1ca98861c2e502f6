use std::collections::HashMap;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Keeps teams in registration order, with a name index for lookups.
/// Saving a team under an existing name replaces the stored team in place.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTeamRepository {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn save(&mut self, team: Team) -> Option<Team> {
        match self.index.get(team.name()) {
            Some(&slot) => {
                tracing::warn!(team = team.name(), "Replacing team with duplicate name");
                Some(std::mem::replace(&mut self.teams[slot], team))
            }
            None => {
                self.index.insert(team.name().to_string(), self.teams.len());
                self.teams.push(team);
                None
            }
        }
    }

    fn find_by_name(&self, name: &str) -> Option<&Team> {
        self.index.get(name).map(|&slot| &self.teams[slot])
    }

    fn find_all(&self) -> Vec<&Team> {
        self.teams.iter().collect()
    }

    fn count(&self) -> usize {
        self.teams.len()
    }
}
