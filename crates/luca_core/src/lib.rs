//! Core domain logic for LUCA, a desktop-style study assistant.
//! This crate is the single source of truth for business invariants.

pub mod assistant;
pub mod clock;
pub mod engine;
pub mod logging;
pub mod model;
pub mod session;
pub mod storage;
pub mod store;

pub use assistant::{AssistantClient, AssistantError, ChatMessage, ChatRole};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{FocusTimer, Phase, Pomodoro, PomodoroConfig, Stopwatch};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteColor, NoteId};
pub use model::settings::{AppliedSettings, Settings, SettingsUpdate};
pub use model::task::{Task, TaskId};
pub use model::tool::{Position, ToolKind};
pub use session::{SessionEvent, StudySession, WindowManager};
pub use storage::{KvStorage, MemoryKvStorage, SqliteKvStorage, StorageError, StorageResult};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
