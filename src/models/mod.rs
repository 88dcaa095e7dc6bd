//! Core data models for the tournament simulator.

mod balance;
mod fixture;
mod ids;
mod player;
mod playoff;
mod standings;

pub use balance::*;
pub use fixture::*;
pub use ids::*;
pub use player::*;
pub use playoff::*;
pub use standings::*;
