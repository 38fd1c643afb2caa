//! Settings store: load once, merge updates, write through.
//!
//! # Responsibility
//! - Load the single settings record at session start.
//! - Apply partial updates with per-field validation and persist the
//!   full record immediately after every change.
//!
//! # Invariants
//! - Missing or corrupt stored data yields the default record.
//! - The full record is written on every `apply`, never a diff.

use crate::model::settings::{AppliedSettings, Settings, SettingsUpdate};
use crate::storage::{keys, KvStorage};
use crate::store::StoreResult;
use log::{debug, info, warn};

/// Session-scoped settings store.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: Settings,
}

impl SettingsStore {
    /// Loads settings, falling back to defaults on missing/corrupt data.
    pub fn load(storage: &dyn KvStorage) -> StoreResult<Self> {
        let settings = match storage.read(keys::SETTINGS)? {
            None => Settings::default(),
            Some(raw) => match serde_json::from_str::<Settings>(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!("event=store_load module=settings status=corrupt_fallback error={err}");
                    Settings::default()
                }
            },
        };

        info!(
            "event=store_load module=settings status=ok theme={:?} language={:?}",
            settings.theme, settings.language
        );

        Ok(Self { settings })
    }

    /// Current settings record.
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merges a partial update and writes the full record through.
    ///
    /// Rejected closed-choice values are reported in the outcome; the
    /// record is only written when something actually changed.
    pub fn apply(
        &mut self,
        storage: &dyn KvStorage,
        update: &SettingsUpdate,
    ) -> StoreResult<AppliedSettings> {
        let outcome = self.settings.apply(update);
        if !outcome.rejected.is_empty() {
            warn!(
                "event=settings_apply module=settings status=rejected fields={}",
                outcome.rejected.join(",")
            );
        }
        if outcome.changed {
            storage.write(keys::SETTINGS, &serde_json::to_string(&self.settings)?)?;
            debug!("event=store_save module=settings status=ok");
        }
        Ok(outcome)
    }
}
