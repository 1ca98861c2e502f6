// Application services
// Queries and aggregate computations over the registered teams

pub mod league_service;

pub use league_service::{player_names, LeagueService};
