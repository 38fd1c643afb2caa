//! Task checklist store with optional daily reset.
//!
//! # Responsibility
//! - Own the persisted flat task list.
//! - Clear the list on first load of a new calendar day when the
//!   daily-reset flag is set.
//!
//! # Invariants
//! - Every save stamps the envelope with the current day, so the next
//!   load can tell whether a calendar day has passed.
//! - The stored date is ISO `YYYY-MM-DD`; an unparsable date counts as
//!   a different day.

use crate::clock::Clock;
use crate::model::task::{Task, TaskId};
use crate::storage::{keys, KvStorage};
use crate::store::StoreResult;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Persisted envelope under the `tasks-store` key.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TasksEnvelope {
    tasks: Vec<Task>,
    daily_reset: bool,
    date: String,
}

/// Session-scoped task store.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    daily_reset: bool,
}

impl TaskStore {
    /// Loads the store, applying daily-reset semantics against today.
    pub fn load(storage: &dyn KvStorage, clock: &dyn Clock) -> StoreResult<Self> {
        let envelope = match storage.read(keys::TASKS)? {
            None => TasksEnvelope::default(),
            Some(raw) => match serde_json::from_str::<TasksEnvelope>(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!("event=store_load module=tasks status=corrupt_fallback error={err}");
                    TasksEnvelope::default()
                }
            },
        };

        let stored_day = NaiveDate::parse_from_str(&envelope.date, "%Y-%m-%d").ok();
        let same_day = stored_day == Some(clock.today());
        let tasks = if envelope.daily_reset && !same_day {
            info!(
                "event=store_load module=tasks status=daily_reset cleared={}",
                envelope.tasks.len()
            );
            Vec::new()
        } else {
            envelope.tasks
        };

        info!(
            "event=store_load module=tasks status=ok count={} daily_reset={}",
            tasks.len(),
            envelope.daily_reset
        );

        Ok(Self {
            tasks,
            daily_reset: envelope.daily_reset,
        })
    }

    /// Adds a task; a title that trims to empty is silently ignored.
    pub fn add_task(
        &mut self,
        storage: &dyn KvStorage,
        clock: &dyn Clock,
        title: &str,
    ) -> StoreResult<Option<TaskId>> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let task = Task::new(trimmed);
        let id = task.id;
        self.tasks.push(task);
        self.save(storage, clock)?;
        Ok(Some(id))
    }

    /// Toggles a task's completion flag; unknown ids are a no-op.
    pub fn toggle_task(
        &mut self,
        storage: &dyn KvStorage,
        clock: &dyn Clock,
        id: TaskId,
    ) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.toggle();
        self.save(storage, clock)?;
        Ok(true)
    }

    /// Enables or disables daily reset; persisted immediately.
    pub fn set_daily_reset(
        &mut self,
        storage: &dyn KvStorage,
        clock: &dyn Clock,
        daily_reset: bool,
    ) -> StoreResult<()> {
        if self.daily_reset != daily_reset {
            self.daily_reset = daily_reset;
            self.save(storage, clock)?;
        }
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn daily_reset(&self) -> bool {
        self.daily_reset
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn save(&self, storage: &dyn KvStorage, clock: &dyn Clock) -> StoreResult<()> {
        let envelope = TasksEnvelope {
            tasks: self.tasks.clone(),
            daily_reset: self.daily_reset,
            date: clock.today().format("%Y-%m-%d").to_string(),
        };
        storage.write(keys::TASKS, &serde_json::to_string(&envelope)?)?;
        debug!(
            "event=store_save module=tasks status=ok count={}",
            self.tasks.len()
        );
        Ok(())
    }
}
