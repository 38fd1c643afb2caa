//! Notebook store: CRUD, filtering and the private-note display gate.
//!
//! # Responsibility
//! - Own the persisted note list and the session's unlock state.
//! - Keep listing order stable: pinned first, then most-recent-first.
//!
//! # Invariants
//! - A note is only created `private` while a passphrase is set.
//! - Private notes never appear in listings unless the caller asks for
//!   them *and* the session has been unlocked.
//! - The passphrase is session state; it is never written to storage.
//!
//! The passphrase gate is a display convenience, not a security
//! boundary: it is compared in plaintext and nothing is encrypted.
//! Anyone with access to the underlying storage can read every note.

use crate::clock::Clock;
use crate::model::note::{normalize_category, Note, NoteColor, NoteId, DEFAULT_CATEGORY};
use crate::storage::{keys, KvStorage};
use crate::store::StoreResult;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Persisted envelope under the `notes-store` key.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct NotesEnvelope {
    notes: Vec<Note>,
    use_private: bool,
}

/// Input for one new note, as collected by the notebook form.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub text: String,
    pub category: String,
    pub tags: Vec<String>,
    pub color: NoteColor,
    pub private: bool,
}

/// Listing filter.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Exact category match; `None` lists all categories.
    pub category: Option<String>,
    /// Case-insensitive substring match on text or any tag.
    pub search_text: Option<String>,
    /// Whether unlocked private notes should be included.
    pub include_private: bool,
}

/// Session-scoped note store.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    use_private: bool,
    passphrase: Option<String>,
    unlocked: bool,
    auto_save: bool,
}

impl NoteStore {
    /// Loads the store from persisted data, falling back to an empty
    /// store when the key is missing or its JSON is corrupt.
    pub fn load(storage: &dyn KvStorage, auto_save: bool) -> StoreResult<Self> {
        let envelope = match storage.read(keys::NOTES)? {
            None => NotesEnvelope::default(),
            Some(raw) => match serde_json::from_str::<NotesEnvelope>(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(
                        "event=store_load module=notes status=corrupt_fallback error={err}"
                    );
                    NotesEnvelope::default()
                }
            },
        };

        info!(
            "event=store_load module=notes status=ok count={} use_private={}",
            envelope.notes.len(),
            envelope.use_private
        );

        Ok(Self {
            notes: envelope.notes,
            use_private: envelope.use_private,
            passphrase: None,
            unlocked: false,
            auto_save,
        })
    }

    /// Adds a note; text that trims to empty is silently ignored.
    ///
    /// Returns the new note's id, or `None` for the empty-text no-op.
    pub fn add_note(
        &mut self,
        storage: &dyn KvStorage,
        clock: &dyn Clock,
        input: NewNote,
    ) -> StoreResult<Option<NoteId>> {
        let trimmed = input.text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        // Private only sticks while a passphrase exists to gate it.
        let private = input.private && self.passphrase.is_some();
        let note = Note::new(
            trimmed,
            &input.category,
            &input.tags,
            input.color,
            private,
            clock.now_epoch_ms(),
        );
        let id = note.id;
        self.notes.insert(0, note);
        self.save(storage)?;
        Ok(Some(id))
    }

    /// Lists notes: pinned first, then unpinned, most-recent-first
    /// within each group.
    pub fn list(&self, filter: &NoteFilter) -> Vec<&Note> {
        let mut visible: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| self.matches(note, filter))
            .collect();
        // Stable sort keeps insertion order (newest first) for equal keys.
        visible.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        visible
    }

    fn matches(&self, note: &Note, filter: &NoteFilter) -> bool {
        if note.private && !(filter.include_private && self.unlocked) {
            return false;
        }
        if let Some(category) = filter.category.as_deref() {
            if note.category != normalize_category(category) {
                return false;
            }
        }
        if let Some(search) = filter.search_text.as_deref() {
            let query = search.trim().to_lowercase();
            if !query.is_empty() {
                let in_text = note.text.to_lowercase().contains(&query);
                let in_tags = note.tags.iter().any(|tag| tag.contains(&query));
                if !in_text && !in_tags {
                    return false;
                }
            }
        }
        true
    }

    /// Deletes a note; deleting a missing id is a no-op.
    pub fn delete(&mut self, storage: &dyn KvStorage, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        if removed {
            self.save(storage)?;
        }
        Ok(removed)
    }

    /// Flips a note's pin flag; unknown ids are a no-op.
    pub fn toggle_pin(&mut self, storage: &dyn KvStorage, id: NoteId) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(false);
        };
        note.pinned = !note.pinned;
        self.save(storage)?;
        Ok(true)
    }

    /// Sets the session passphrase gating private notes.
    ///
    /// Any change re-locks the session so the new gate takes effect
    /// immediately; blank input clears the passphrase entirely.
    pub fn set_passphrase(&mut self, passphrase: &str) {
        let trimmed = passphrase.trim();
        self.passphrase = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.unlocked = false;
    }

    /// Attempts to unlock private notes for this session.
    ///
    /// Plain string comparison, nothing cryptographic; a failed attempt
    /// re-locks the session.
    pub fn unlock(&mut self, attempt: &str) -> bool {
        match self.passphrase.as_deref() {
            Some(passphrase) if passphrase == attempt => {
                self.unlocked = true;
                true
            }
            _ => {
                self.unlocked = false;
                false
            }
        }
    }

    /// Toggles the "private notes" feature flag; persisted.
    pub fn set_use_private(
        &mut self,
        storage: &dyn KvStorage,
        use_private: bool,
    ) -> StoreResult<()> {
        if self.use_private != use_private {
            self.use_private = use_private;
            self.save(storage)?;
        }
        Ok(())
    }

    /// Distinct categories across all notes, always including the default.
    pub fn categories(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        set.insert(DEFAULT_CATEGORY.to_string());
        for note in &self.notes {
            set.insert(note.category.clone());
        }
        set.into_iter().collect()
    }

    /// Enables or disables write-through saving (the auto-save setting).
    pub fn set_auto_save(&mut self, auto_save: bool) {
        self.auto_save = auto_save;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn use_private(&self) -> bool {
        self.use_private
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Writes the whole envelope back; skipped while auto-save is off.
    fn save(&self, storage: &dyn KvStorage) -> StoreResult<()> {
        if !self.auto_save {
            debug!("event=store_save module=notes status=skipped reason=auto_save_off");
            return Ok(());
        }
        let envelope = NotesEnvelope {
            notes: self.notes.clone(),
            use_private: self.use_private,
        };
        storage.write(keys::NOTES, &serde_json::to_string(&envelope)?)?;
        debug!(
            "event=store_save module=notes status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Forces a write regardless of the auto-save flag (explicit save).
    pub fn persist(&self, storage: &dyn KvStorage) -> StoreResult<()> {
        let envelope = NotesEnvelope {
            notes: self.notes.clone(),
            use_private: self.use_private,
        };
        storage.write(keys::NOTES, &serde_json::to_string(&envelope)?)?;
        Ok(())
    }
}
