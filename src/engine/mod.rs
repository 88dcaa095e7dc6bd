//! Tournament simulation engine.
//!
//! Pure, synchronous computations over in-memory state:
//! - **validator**: squad composition report
//! - **fixtures**: double round-robin generation and calendar scheduling
//! - **resolver**: randomized, balance-weighted match outcomes
//! - **standings**: points-table accumulation and ranking
//! - **playoffs**: the four-stage bracket state machine
//!
//! Preconditions (league complete, fixtures remaining) are guarded by the
//! owning [`crate::session::TournamentSession`], not re-validated here.

pub mod fixtures;
pub mod playoffs;
pub mod resolver;
pub mod standings;
pub mod validator;

pub use fixtures::{build_schedule, generate_fixtures};
pub use playoffs::PlayoffBracket;
pub use resolver::{resolve, EntropySource, RandomSource, SeededSource, TeamStrength};
pub use standings::StandingsTable;
pub use validator::build_balance_report;
