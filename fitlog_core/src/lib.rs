#![forbid(unsafe_code)]

//! Exercise history persistence for the fitlog app.
//!
//! This crate provides:
//! - Domain types (exercise days, seed modes)
//! - The day-bucketed history store and its insertion/merge logic
//! - Persistence to a single JSON history file with atomic replace
//! - Demo and fixture seed data
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{calendar_day, ExerciseDay, SeedMode};
pub use config::Config;
pub use store::HistoryStore;
