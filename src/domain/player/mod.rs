// Player domain module
// Contains the player entity, its builder and the position value object

#![allow(clippy::module_inception)]

pub mod builder;
pub mod player;
pub mod value_objects;

// Re-export main types for convenience
pub use builder::PlayerBuilder;
pub use player::Player;
pub use value_objects::Position;
