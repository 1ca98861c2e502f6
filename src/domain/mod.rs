// Domain layer module exports
// Entities and ports only; storage adapters live in infrastructure

pub mod player;
pub mod repositories;
pub mod team;
