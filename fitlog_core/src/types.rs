//! Core domain types for the exercise history store.
//!
//! This module defines:
//! - ExerciseDay: one calendar day's exercise log
//! - SeedMode: constructor-time seeding behavior
//! - The calendar-day extraction used for all day comparisons

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Extract the calendar day of a timestamp.
///
/// Every day comparison in the store goes through this single extraction
/// so time-of-day precision never leaks into ordering or deduplication.
/// UTC is the reference time zone for the whole system.
pub fn calendar_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// One calendar day's exercise log
///
/// `exercises` keeps completion order and may contain duplicates (the
/// same exercise done more than once in a day). The `id` is a stable
/// handle for observers only; day identity is the calendar day of `date`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseDay {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub exercises: Vec<String>,
}

impl ExerciseDay {
    /// Create a day record together with its first completed exercise.
    ///
    /// A day record never exists without at least one exercise.
    pub fn new(date: DateTime<Utc>, first_exercise: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            exercises: vec![first_exercise.into()],
        }
    }

    /// The calendar day this record covers
    pub fn day(&self) -> NaiveDate {
        calendar_day(self.date)
    }

    /// Distinct exercise names, sorted ascending
    pub fn unique_exercises(&self) -> Vec<String> {
        let mut names = self.exercises.clone();
        names.sort();
        names.dedup();
        names
    }

    /// How many times the given exercise was completed this day
    pub fn count_exercise(&self, name: &str) -> usize {
        self.exercises.iter().filter(|e| e.as_str() == name).count()
    }
}

/// Seeding behavior applied once at store construction
///
/// Seeding is an explicit caller decision; the store never inspects the
/// environment or build configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Start from whatever the storage file holds
    #[default]
    None,
    /// Replace the in-memory history with generated demo data (not saved)
    Demo,
    /// Populate fixture data when the loaded history is empty, then save
    Fixture,
}
