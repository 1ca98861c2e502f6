use std::collections::BTreeMap;

use crate::config::LeagueConfig;
use crate::domain::player::{Player, Position};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamEvent};
use crate::errors::{LeagueError, LeagueResult};
use crate::infrastructure::repositories::InMemoryTeamRepository;

/// Query service over a registry of teams
///
/// Owns the repository holding every registered team. All queries are
/// read-only and traverse teams in registration order, then each roster in
/// insertion order.
///
/// # Example
/// ```
/// use soccer_league::domain::player::{Player, Position};
/// use soccer_league::domain::team::Team;
/// use soccer_league::services::LeagueService;
///
/// let mut service = LeagueService::new();
/// let mut team = Team::new("Time F");
/// team.add(
///     Player::builder()
///         .with_name("Jogador FA")
///         .with_city("Cidade A")
///         .with_country("Brasil")
///         .with_goals(10)
///         .with_position(Position::Attack)
///         .build()
///         .expect("valid player"),
/// )
/// .expect("player added");
/// service.add_team(team).expect("team registered");
///
/// let top = service.find_top_scorer("Time F").expect("team has players");
/// assert_eq!(top.name(), "Jogador FA");
/// ```
#[derive(Debug, Clone)]
pub struct LeagueService<R = InMemoryTeamRepository> {
    repository: R,
    config: LeagueConfig,
}

impl LeagueService<InMemoryTeamRepository> {
    /// Creates a service with an empty in-memory registry and default
    /// configuration
    pub fn new() -> Self {
        Self::with_config(LeagueConfig::default())
    }

    /// Creates a service with an empty in-memory registry
    pub fn with_config(config: LeagueConfig) -> Self {
        Self::with_repository(InMemoryTeamRepository::new(), config)
    }
}

impl Default for LeagueService<InMemoryTeamRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TeamRepository> LeagueService<R> {
    /// Creates a service on top of an existing repository
    pub fn with_repository(repository: R, config: LeagueConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// Registers a team under its name
    ///
    /// A team registered under an existing name replaces the earlier one.
    /// Events the team recorded before registration are drained, logged and
    /// handed back to the caller.
    ///
    /// # Returns
    /// * `Ok(Vec<TeamEvent>)` - The team's pending events, oldest first
    /// * `Err(LeagueError::TeamNotFound)` - If no team was given
    pub fn add_team(&mut self, team: impl Into<Option<Team>>) -> LeagueResult<Vec<TeamEvent>> {
        let mut team = team.into().ok_or(LeagueError::TeamNotFound(None))?;

        let events = team.take_events();
        for event in &events {
            tracing::debug!(?event, "Team event");
        }

        tracing::debug!(team = team.name(), players = team.len(), "Registering team");
        self.repository.save(team);

        Ok(events)
    }

    /// Looks up a registered team by name
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.repository.find_by_name(name)
    }

    /// All registered teams, in registration order
    pub fn teams(&self) -> Vec<&Team> {
        self.repository.find_all()
    }

    pub fn team_count(&self) -> usize {
        self.repository.count()
    }

    /// Every player of every registered team, in traversal order
    pub fn all_players(&self) -> Vec<&Player> {
        self.repository
            .find_all()
            .into_iter()
            .flat_map(Team::players)
            .collect()
    }

    /// Finds the player with the most goals in the named team
    ///
    /// On ties the player added first wins.
    ///
    /// # Returns
    /// * `Ok(&Player)` - The top scorer
    /// * `Err(LeagueError::TeamNotFound)` - If no team has that name
    /// * `Err(LeagueError::TeamHasNoPlayers)` - If the team's roster is empty
    pub fn find_top_scorer(&self, team_name: &str) -> LeagueResult<&Player> {
        let team = self
            .repository
            .find_by_name(team_name)
            .ok_or_else(|| LeagueError::team_not_found(team_name))?;

        team.players()
            .iter()
            .reduce(|best, player| {
                if player.goals() > best.goals() {
                    player
                } else {
                    best
                }
            })
            .ok_or_else(|| LeagueError::TeamHasNoPlayers(team_name.to_string()))
    }

    /// Every player sorted by goals, fewest first
    ///
    /// The sort is stable, so players with equal goals keep traversal order.
    pub fn players_sorted_by_goals(&self) -> Vec<&Player> {
        let mut players = self.all_players();
        players.sort_by_key(|player| player.goals());
        players
    }

    /// Groups every player by position
    ///
    /// Positions nobody plays are absent from the map.
    pub fn group_players_by_position(&self) -> BTreeMap<Position, Vec<&Player>> {
        let mut groups: BTreeMap<Position, Vec<&Player>> = BTreeMap::new();
        for player in self.all_players() {
            groups.entry(player.position()).or_default().push(player);
        }
        groups
    }

    /// Players with more goals than the configured highlight threshold
    pub fn find_players_eligible_for_highlight_segment(&self) -> Vec<&Player> {
        let threshold = self.config.highlight_threshold;
        let eligible: Vec<&Player> = self
            .all_players()
            .into_iter()
            .filter(|player| player.goals() > threshold)
            .collect();

        tracing::debug!(threshold, eligible = eligible.len(), "Highlight segment query");
        eligible
    }
}

/// Maps players to their names, preserving order
pub fn player_names<'a>(players: &[&'a Player]) -> Vec<&'a str> {
    players.iter().map(|player| player.name()).collect()
}
