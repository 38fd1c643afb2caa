//! Future-message store: a note to tomorrow's you.
//!
//! # Responsibility
//! - Keep one message per calendar day, keyed by ISO date.
//! - Surface yesterday's message on load.
//!
//! # Invariants
//! - At most one message per day; saving again overwrites it.

use crate::clock::Clock;
use crate::storage::{keys, KvStorage};
use crate::store::StoreResult;
use chrono::Duration;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Session-scoped future-message store.
///
/// The persisted value is the raw `date -> message` map.
#[derive(Debug, Default)]
pub struct FutureMessageStore {
    messages: BTreeMap<String, String>,
}

impl FutureMessageStore {
    /// Loads the store, falling back to empty on missing/corrupt data.
    pub fn load(storage: &dyn KvStorage) -> StoreResult<Self> {
        let messages = match storage.read(keys::FUTURE_MESSAGES)? {
            None => BTreeMap::new(),
            Some(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(
                        "event=store_load module=future_messages status=corrupt_fallback error={err}"
                    );
                    BTreeMap::new()
                }
            },
        };

        info!(
            "event=store_load module=future_messages status=ok count={}",
            messages.len()
        );

        Ok(Self { messages })
    }

    /// Saves today's message; text that trims to empty is ignored.
    ///
    /// Returns whether anything was written.
    pub fn save_today(
        &mut self,
        storage: &dyn KvStorage,
        clock: &dyn Clock,
        text: &str,
    ) -> StoreResult<bool> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        self.messages
            .insert(date_key(clock.today()), trimmed.to_string());
        storage.write(
            keys::FUTURE_MESSAGES,
            &serde_json::to_string(&self.messages)?,
        )?;
        debug!(
            "event=store_save module=future_messages status=ok count={}",
            self.messages.len()
        );
        Ok(true)
    }

    /// The message written yesterday, if any.
    pub fn yesterday_message(&self, clock: &dyn Clock) -> Option<&str> {
        let yesterday = clock.today() - Duration::days(1);
        self.messages.get(&date_key(yesterday)).map(String::as_str)
    }

    /// The message written today, if any.
    pub fn today_message(&self, clock: &dyn Clock) -> Option<&str> {
        self.messages.get(&date_key(clock.today())).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn date_key(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
