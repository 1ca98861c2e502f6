//! Soccer League Library
//!
//! This library provides an in-memory domain model for soccer teams and
//! players, including validated player construction, team rosters and a
//! query service over the registered teams.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod services;

pub use config::LeagueConfig;
pub use domain::player::{Player, PlayerBuilder, Position};
pub use domain::team::{Team, TeamEvent};
pub use errors::{ErrorKind, LeagueError, LeagueResult};
pub use services::{player_names, LeagueService};
