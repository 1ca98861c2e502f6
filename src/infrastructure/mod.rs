// Infrastructure layer module
// Contains storage adapters for the domain ports

pub mod repositories;
