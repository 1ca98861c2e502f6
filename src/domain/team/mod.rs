// Team domain module
// Contains the team aggregate root and its domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::Team;
