//! Business logic services layer

pub mod data_service;
pub mod seed;

pub use data_service::DataService;
pub use seed::{FakeSeed, SeedSource};
