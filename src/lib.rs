//! hebdofit - Personalized weekly training program builder
//!
//! Matches a questionnaire profile against an exercise catalog, ranks a
//! contraindication-safe shortlist and turns it into a day-by-day program
//! with sets, reps, rest and estimated session durations.

pub mod db;
pub mod exercises;
pub mod export;
pub mod profile;
pub mod program;
pub mod recommend;
pub mod tui;

pub use db::Database;
pub use program::{WeeklyProgram, create_weekly_program};
pub use recommend::{ScoredExercise, recommend};
