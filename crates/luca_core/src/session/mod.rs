//! Study session: the composition root for one signed-in user.
//!
//! # Responsibility
//! - Construct the shared stores once at startup and hand them to the
//!   tools that need them.
//! - Forward user commands to the window manager and wall-clock ticks
//!   to every open engine.
//!
//! # Invariants
//! - Stores are explicit session-owned singletons; there is no
//!   module-level mutable state anywhere in the crate.
//! - Window state is rebuilt fresh on every `start`; only tool-owned
//!   data (notes, tasks, messages, settings) is persisted.

mod drag;
mod window_manager;

pub use drag::DragSession;
pub use window_manager::{SessionEvent, ToolInstance, ToolState, WindowManager};

use crate::clock::Clock;
use crate::model::mood::Mood;
use crate::model::note::NoteId;
use crate::model::settings::{AppliedSettings, Settings, SettingsUpdate};
use crate::model::task::TaskId;
use crate::model::tool::{Position, ToolKind};
use crate::storage::KvStorage;
use crate::store::future_store::FutureMessageStore;
use crate::store::note_store::{NewNote, NoteFilter, NoteStore};
use crate::store::settings_store::SettingsStore;
use crate::store::task_store::TaskStore;
use crate::store::StoreResult;
use log::info;

/// One user's session: window manager plus shared stores.
pub struct StudySession<S: KvStorage, C: Clock> {
    storage: S,
    clock: C,
    windows: WindowManager,
    notes: NoteStore,
    tasks: TaskStore,
    future: FutureMessageStore,
    settings: SettingsStore,
}

impl<S: KvStorage, C: Clock> StudySession<S, C> {
    /// Loads all stores and opens the configured default tool, if any.
    pub fn start(storage: S, clock: C) -> StoreResult<Self> {
        let settings = SettingsStore::load(&storage)?;
        let auto_save = settings.get().auto_save_notes;
        let notes = NoteStore::load(&storage, auto_save)?;
        let tasks = TaskStore::load(&storage, &clock)?;
        let future = FutureMessageStore::load(&storage)?;

        let mut session = Self {
            storage,
            clock,
            windows: WindowManager::new(),
            notes,
            tasks,
            future,
            settings,
        };

        if let Some(kind) = session.settings.get().default_tool.tool_kind() {
            session.windows.open(kind);
        }

        info!(
            "event=session_start module=session status=ok notes={} tasks={} open_tools={}",
            session.notes.len(),
            session.tasks.len(),
            session.windows.open_count()
        );

        Ok(session)
    }

    // ---- window commands -------------------------------------------------

    pub fn open_tool(&mut self, kind: ToolKind) {
        self.windows.open(kind);
    }

    pub fn close_tool(&mut self, kind: ToolKind) -> bool {
        self.windows.close(kind)
    }

    pub fn toggle_minimize(&mut self, kind: ToolKind) -> bool {
        self.windows.toggle_minimize(kind)
    }

    pub fn focus_tool(&mut self, kind: ToolKind) -> bool {
        self.windows.focus(kind)
    }

    pub fn begin_drag(&mut self, kind: ToolKind, pointer: Position) -> bool {
        self.windows.begin_drag(kind, pointer)
    }

    pub fn drag_to(&mut self, pointer: Position) {
        self.windows.drag_to(pointer);
    }

    pub fn end_drag(&mut self) {
        self.windows.end_drag();
    }

    /// One wall-clock second for every open engine.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        self.windows.tick()
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    // ---- notebook --------------------------------------------------------

    pub fn add_note(&mut self, input: NewNote) -> StoreResult<Option<NoteId>> {
        self.notes.add_note(&self.storage, &self.clock, input)
    }

    pub fn list_notes(&self, filter: &NoteFilter) -> Vec<&crate::model::note::Note> {
        self.notes.list(filter)
    }

    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        self.notes.delete(&self.storage, id)
    }

    pub fn toggle_note_pin(&mut self, id: NoteId) -> StoreResult<bool> {
        self.notes.toggle_pin(&self.storage, id)
    }

    pub fn set_note_passphrase(&mut self, passphrase: &str) {
        self.notes.set_passphrase(passphrase);
    }

    pub fn unlock_notes(&mut self, attempt: &str) -> bool {
        self.notes.unlock(attempt)
    }

    pub fn set_use_private_notes(&mut self, use_private: bool) -> StoreResult<()> {
        self.notes.set_use_private(&self.storage, use_private)
    }

    /// Explicit save for when auto-save is off.
    pub fn save_notes(&self) -> StoreResult<()> {
        self.notes.persist(&self.storage)
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    // ---- tasks -----------------------------------------------------------

    pub fn add_task(&mut self, title: &str) -> StoreResult<Option<TaskId>> {
        self.tasks.add_task(&self.storage, &self.clock, title)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> StoreResult<bool> {
        self.tasks.toggle_task(&self.storage, &self.clock, id)
    }

    pub fn set_task_daily_reset(&mut self, daily_reset: bool) -> StoreResult<()> {
        self.tasks
            .set_daily_reset(&self.storage, &self.clock, daily_reset)
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    // ---- future messages -------------------------------------------------

    pub fn save_future_message(&mut self, text: &str) -> StoreResult<bool> {
        self.future.save_today(&self.storage, &self.clock, text)
    }

    pub fn yesterday_message(&self) -> Option<&str> {
        self.future.yesterday_message(&self.clock)
    }

    // ---- settings --------------------------------------------------------

    pub fn settings(&self) -> &Settings {
        self.settings.get()
    }

    /// Applies a settings update and propagates the auto-save flag to
    /// the note store.
    pub fn apply_settings(&mut self, update: &SettingsUpdate) -> StoreResult<AppliedSettings> {
        let outcome = self.settings.apply(&self.storage, update)?;
        self.notes
            .set_auto_save(self.settings.get().auto_save_notes);
        Ok(outcome)
    }

    // ---- mood ------------------------------------------------------------

    /// Sets the mood on an open mood-assistant window.
    pub fn set_mood(&mut self, mood: Mood) -> bool {
        match self.windows.get_mut(ToolKind::Mood) {
            Some(instance) => instance.set_mood(mood),
            None => false,
        }
    }

    pub fn current_mood(&self) -> Option<Mood> {
        self.windows.get(ToolKind::Mood).and_then(ToolInstance::mood)
    }
}
