pub mod dto;
pub mod error;
pub mod models;
pub mod normalize;
pub mod services;
pub mod store;

pub use store::RosterStore;
