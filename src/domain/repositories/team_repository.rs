use crate::domain::team::Team;

/// Repository trait for Team aggregate
///
/// Defines the contract for registering and retrieving teams by name.
/// Team names are unique keys within a repository.
pub trait TeamRepository: Send + Sync {
    /// Save a team under its name (insert or replace)
    ///
    /// Returns the previously registered team with the same name, if any.
    fn save(&mut self, team: Team) -> Option<Team>;

    /// Find a team by its name
    fn find_by_name(&self, name: &str) -> Option<&Team>;

    /// All registered teams, in registration order
    fn find_all(&self) -> Vec<&Team>;

    /// Number of registered teams
    fn count(&self) -> usize;
}
