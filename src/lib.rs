//! # League Sim
//!
//! An interactive cricket-league tournament simulator.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, fixtures, standings, playoffs)
//! - **ingest**: CSV roster loading
//! - **engine**: Squad validation, fixture generation, match resolution,
//!   standings tracking and playoff bracket resolution
//! - **session**: The tournament session owning all mutable state
//! - **api**: REST API endpoints for the renderer
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod engine;
pub mod ingest;
pub mod models;
pub mod session;

pub use models::*;

/// Round a value to two decimal places.
///
/// Used for reported average ratings and NRR adjustments, which the
/// tournament format quotes to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Serialize an `f64` rounded to two decimals (internal values stay unrounded).
pub fn serialize_round2<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(round2(*value))
}
