//! The day-bucketed exercise history store.
//!
//! Exercise days are kept newest-first, one record per calendar day, and
//! persisted as a single JSON file. Every mutation notifies subscribers
//! synchronously and then writes the file back with an atomic replace.

use crate::{calendar_day, Error, ExerciseDay, Result, SeedMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Callback invoked with the full day list after every mutation
pub type Subscriber = Box<dyn Fn(&[ExerciseDay])>;

/// On-disk record: `[identifier, date, exercise-names]`
///
/// A tuple struct so the file stays an ordered sequence of 3-element
/// ordered tuples.
#[derive(Serialize, Deserialize)]
struct StoredDay(String, DateTime<Utc>, Vec<String>);

impl From<&ExerciseDay> for StoredDay {
    fn from(day: &ExerciseDay) -> Self {
        StoredDay(day.id.to_string(), day.date, day.exercises.clone())
    }
}

impl From<StoredDay> for ExerciseDay {
    fn from(stored: StoredDay) -> Self {
        // Stored identifiers are informational; restore when parseable,
        // regenerate otherwise.
        let id = Uuid::parse_str(&stored.0).unwrap_or_else(|_| Uuid::new_v4());
        ExerciseDay {
            id,
            date: stored.1,
            exercises: stored.2,
        }
    }
}

/// Exercise history grouped by calendar day, backed by a single file
///
/// Invariant: `exercise_days` is strictly descending by calendar day and
/// each calendar day appears at most once. New exercises for an existing
/// day merge into that day's record.
///
/// Single-owner, synchronous: every operation runs to completion before
/// returning, and callers serialize their own access. There is no file
/// locking and no protection against concurrent external writers.
pub struct HistoryStore {
    path: PathBuf,
    exercise_days: Vec<ExerciseDay>,
    loading_error: bool,
    subscribers: Vec<Subscriber>,
}

impl HistoryStore {
    /// Construct a store over the given storage file and load it.
    ///
    /// A present-but-undecodable file sets `loading_error` and leaves the
    /// history empty rather than failing construction; a missing file is
    /// not an error. Seeding runs after the load, per [`SeedMode`].
    pub fn new(path: impl Into<PathBuf>, seed: SeedMode) -> Self {
        let mut store = Self {
            path: path.into(),
            exercise_days: Vec::new(),
            loading_error: false,
            subscribers: Vec::new(),
        };

        if let Err(e) = store.load() {
            tracing::warn!("History load failed, starting empty: {}", e);
            store.loading_error = true;
        }

        match seed {
            SeedMode::None => {}
            SeedMode::Demo => {
                store.exercise_days = crate::seed::demo_history(Utc::now());
                tracing::info!(
                    "Seeded {} demo days (in-memory only)",
                    store.exercise_days.len()
                );
            }
            SeedMode::Fixture => {
                if store.exercise_days.is_empty() {
                    store.exercise_days = crate::seed::fixture_history(Utc::now());
                    if let Err(e) = store.save() {
                        tracing::warn!("Could not persist fixture history: {}", e);
                    }
                }
            }
        }

        store
    }

    /// Storage file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Day records, newest first
    pub fn exercise_days(&self) -> &[ExerciseDay] {
        &self.exercise_days
    }

    /// Whether the most recent load attempt failed
    pub fn loading_error(&self) -> bool {
        self.loading_error
    }

    /// Register a callback invoked synchronously after every mutation
    /// (and after a successful reload), before the mutating call returns
    pub fn subscribe(&mut self, callback: impl Fn(&[ExerciseDay]) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.exercise_days);
        }
    }

    /// Reload history from the storage file.
    ///
    /// A missing file is a successful no-op that leaves the in-memory
    /// collection as-is. A file that exists but cannot be read or decoded
    /// fails with [`Error::LoadFailure`], also leaving the collection
    /// untouched.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            tracing::debug!("No history file at {:?}, nothing to load", self.path);
            return Ok(());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::LoadFailure(format!("{:?}: {}", self.path, e)))?;
        let stored: Vec<StoredDay> = serde_json::from_str(&contents)
            .map_err(|e| Error::LoadFailure(format!("{:?}: {}", self.path, e)))?;

        self.exercise_days = stored.into_iter().map(ExerciseDay::from).collect();
        self.loading_error = false;
        tracing::debug!(
            "Loaded {} days from {:?}",
            self.exercise_days.len(),
            self.path
        );
        self.notify();
        Ok(())
    }

    /// Write the current history to the storage file.
    ///
    /// The file is replaced atomically: encode, write to a temp file in
    /// the same directory, sync, rename. A reader never observes a
    /// partial file.
    pub fn save(&self) -> Result<()> {
        self.write_atomic()
            .map_err(|e| Error::SaveFailure(format!("{:?}: {}", self.path, e)))?;
        tracing::debug!(
            "Saved {} days to {:?}",
            self.exercise_days.len(),
            self.path
        );
        Ok(())
    }

    fn write_atomic(&self) -> std::io::Result<()> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "history path missing parent")
        })?;
        std::fs::create_dir_all(parent)?;

        let stored: Vec<StoredDay> = self.exercise_days.iter().map(StoredDay::from).collect();
        let contents = serde_json::to_string(&stored)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Log an exercise completed today.
    ///
    /// Appends to the newest day record when it covers today; otherwise a
    /// new record for today becomes index 0. Returns the save outcome;
    /// the in-memory mutation stays applied even when saving fails.
    pub fn add_done_exercise(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_done_exercise_at(Utc::now(), name)
    }

    /// [`Self::add_done_exercise`] with an explicit "now", for callers
    /// that control the clock
    pub fn add_done_exercise_at(
        &mut self,
        now: DateTime<Utc>,
        name: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        let today = calendar_day(now);

        if self.exercise_days.first().map_or(false, |d| d.day() == today) {
            self.exercise_days[0].exercises.push(name);
        } else {
            self.exercise_days.insert(0, ExerciseDay::new(now, name));
        }

        self.notify();
        self.save()
    }

    /// Log an exercise for an arbitrary calendar day (backfill).
    ///
    /// Scans newest-first for the first record not strictly after the
    /// target day: a record on the same day absorbs the exercise, an
    /// older record gets a new day record inserted in front of it, and
    /// with no such record the new day becomes the oldest at the end.
    /// Returns the save outcome; the in-memory mutation stays applied
    /// even when saving fails.
    pub fn add_exercise(&mut self, date: DateTime<Utc>, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let target = calendar_day(date);

        match self.exercise_days.iter().position(|d| d.day() <= target) {
            Some(index) if self.exercise_days[index].day() == target => {
                self.exercise_days[index].exercises.push(name);
            }
            Some(index) => {
                self.exercise_days.insert(index, ExerciseDay::new(date, name));
            }
            None => {
                self.exercise_days.push(ExerciseDay::new(date, name));
            }
        }

        self.notify();
        self.save()
    }
}
