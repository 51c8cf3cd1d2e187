//! Built-in demo and fixture histories.
//!
//! These reproduce the app's built-in exercise set and give the UI layer
//! something to render before a user has logged anything. Callers opt in
//! through [`crate::SeedMode`] at store construction.

use crate::ExerciseDay;
use chrono::{DateTime, Duration, Utc};

/// The app's built-in exercise names
pub const EXERCISE_NAMES: [&str; 4] = ["Squat", "Step Up", "Burpee", "Sun Salute"];

/// Generate a week of plausible prior days, newest first.
///
/// In-memory preview data; the store does not persist it.
pub fn demo_history(today: DateTime<Utc>) -> Vec<ExerciseDay> {
    let mut days = Vec::new();
    for offset in 1..=7i64 {
        let index = offset as usize;
        let date = today - Duration::days(offset);
        let mut day = ExerciseDay::new(date, EXERCISE_NAMES[index % EXERCISE_NAMES.len()]);
        // Vary per-day volume so the demo history is not uniform
        for extra in 0..index % 3 {
            day.exercises
                .push(EXERCISE_NAMES[(index + extra + 1) % EXERCISE_NAMES.len()].into());
        }
        days.push(day);
    }
    days
}

/// Small deterministic history used by `SeedMode::Fixture`
pub fn fixture_history(today: DateTime<Utc>) -> Vec<ExerciseDay> {
    let mut yesterday = ExerciseDay::new(today - Duration::days(1), "Squat");
    yesterday.exercises.push("Burpee".into());
    yesterday.exercises.push("Squat".into());

    let two_days_ago = ExerciseDay::new(today - Duration::days(2), "Sun Salute");

    vec![yesterday, two_days_ago]
}
