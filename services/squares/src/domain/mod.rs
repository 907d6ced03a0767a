pub mod grid;
pub mod repository;
pub mod types;
