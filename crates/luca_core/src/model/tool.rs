//! Tool registry: the closed set of study tools and their metadata.
//!
//! # Responsibility
//! - Enumerate every tool kind the session can open.
//! - Provide display metadata and default spawn positions.
//!
//! # Invariants
//! - `ToolKind` is a closed set; adding a kind is a compile-checked change
//!   because every dispatch site matches exhaustively.
//! - Each kind is single-instance, so the kind doubles as the window id.

use serde::{Deserialize, Serialize};

/// Screen coordinates of a tool window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Every tool the session manager can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    FocusTimer,
    Stopwatch,
    Pomodoro,
    Notebook,
    Tasks,
    Mood,
    FutureMessages,
    Settings,
}

impl ToolKind {
    /// All tool kinds in toolbox display order.
    pub const ALL: [ToolKind; 8] = [
        ToolKind::FocusTimer,
        ToolKind::Stopwatch,
        ToolKind::Pomodoro,
        ToolKind::Notebook,
        ToolKind::Tasks,
        ToolKind::Mood,
        ToolKind::FutureMessages,
        ToolKind::Settings,
    ];

    /// Stable key used in persisted settings and logging.
    pub fn key(self) -> &'static str {
        match self {
            Self::FocusTimer => "focus-timer",
            Self::Stopwatch => "stopwatch",
            Self::Pomodoro => "pomodoro",
            Self::Notebook => "notebook",
            Self::Tasks => "tasks",
            Self::Mood => "mood",
            Self::FutureMessages => "future-messages",
            Self::Settings => "settings",
        }
    }

    /// Window chrome title.
    pub fn title(self) -> &'static str {
        match self {
            Self::FocusTimer => "Focus Timer",
            Self::Stopwatch => "Stopwatch",
            Self::Pomodoro => "Pomodoro Mode",
            Self::Notebook => "Notebook & Notes",
            Self::Tasks => "Task Checklist",
            Self::Mood => "Mood Assistant",
            Self::FutureMessages => "Future-You Messages",
            Self::Settings => "Settings",
        }
    }

    /// Default spawn position for the first window of this kind.
    ///
    /// The window manager shifts this by a fixed step per already-open
    /// window so freshly opened tools do not stack exactly on top of
    /// each other.
    pub fn default_position(self) -> Position {
        match self {
            Self::FocusTimer => Position::new(40, 80),
            Self::Stopwatch => Position::new(80, 100),
            Self::Pomodoro => Position::new(120, 120),
            Self::Notebook => Position::new(160, 90),
            Self::Tasks => Position::new(200, 110),
            Self::Mood => Position::new(240, 130),
            Self::FutureMessages => Position::new(280, 150),
            Self::Settings => Position::new(320, 100),
        }
    }

    /// Parses a stable key back into a tool kind.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == value.trim())
    }
}
