pub mod matches;
pub mod playoffs;
pub mod roster;
pub mod schedule;
pub mod standings;
