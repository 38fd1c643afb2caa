//! Window manager: open tool instances, z-order and drag dispatch.
//!
//! # Responsibility
//! - Track which tools are open, minimized and focused.
//! - Own each instance's engine state and deliver ticks to it.
//!
//! # Invariants
//! - The open instance with the highest `z_order` is always the most
//!   recently focused one.
//! - Minimized windows keep ticking ("minimize, don't pause").
//! - Closing an instance drops its engine state; no later tick can
//!   reach it.
//! - Nothing in this module is persisted; it is rebuilt every session.

use crate::engine::{FocusTimer, FocusTimerEvent, Pomodoro, PomodoroEvent, Stopwatch};
use crate::model::mood::Mood;
use crate::model::tool::{Position, ToolKind};
use crate::session::drag::DragSession;
use log::debug;

/// Per-open-window offset so newly opened tools do not stack exactly.
const SPAWN_OFFSET_STEP: i32 = 24;

/// Engine / transient widget state owned by one tool instance.
///
/// Tools without engine state (notebook, tasks, settings, future
/// messages) read and write the shared session stores instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolState {
    FocusTimer(FocusTimer),
    Stopwatch(Stopwatch),
    Pomodoro(Pomodoro),
    Notebook,
    Tasks,
    Mood(Mood),
    FutureMessages,
    Settings,
}

impl ToolState {
    fn for_kind(kind: ToolKind) -> Self {
        match kind {
            ToolKind::FocusTimer => Self::FocusTimer(FocusTimer::new()),
            ToolKind::Stopwatch => Self::Stopwatch(Stopwatch::new()),
            ToolKind::Pomodoro => Self::Pomodoro(Pomodoro::default()),
            ToolKind::Notebook => Self::Notebook,
            ToolKind::Tasks => Self::Tasks,
            ToolKind::Mood => Self::Mood(Mood::default()),
            ToolKind::FutureMessages => Self::FutureMessages,
            ToolKind::Settings => Self::Settings,
        }
    }
}

/// One open tool window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInstance {
    pub kind: ToolKind,
    pub position: Position,
    pub minimized: bool,
    pub z_order: u32,
    pub state: ToolState,
}

impl ToolInstance {
    pub fn focus_timer_mut(&mut self) -> Option<&mut FocusTimer> {
        match &mut self.state {
            ToolState::FocusTimer(timer) => Some(timer),
            _ => None,
        }
    }

    pub fn stopwatch_mut(&mut self) -> Option<&mut Stopwatch> {
        match &mut self.state {
            ToolState::Stopwatch(stopwatch) => Some(stopwatch),
            _ => None,
        }
    }

    pub fn pomodoro_mut(&mut self) -> Option<&mut Pomodoro> {
        match &mut self.state {
            ToolState::Pomodoro(pomodoro) => Some(pomodoro),
            _ => None,
        }
    }

    pub fn mood(&self) -> Option<Mood> {
        match self.state {
            ToolState::Mood(mood) => Some(mood),
            _ => None,
        }
    }

    pub fn set_mood(&mut self, mood: Mood) -> bool {
        match &mut self.state {
            ToolState::Mood(current) => {
                *current = mood;
                true
            }
            _ => false,
        }
    }
}

/// Something a timer engine announced during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The focus timer countdown reached zero.
    FocusSessionEnded,
    /// A pomodoro phase started.
    PomodoroPhaseStarted(crate::engine::Phase),
    /// All pomodoro cycles completed.
    PomodoroCyclesCompleted,
}

/// Tracks open tool windows; rebuilt fresh every session.
#[derive(Debug, Default)]
pub struct WindowManager {
    instances: Vec<ToolInstance>,
    next_z: u32,
    drag: Option<DragSession>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a tool, or restores and re-tops it if already open.
    ///
    /// Idempotent: tool kinds are single-instance.
    pub fn open(&mut self, kind: ToolKind) {
        if let Some(instance) = self.instances.iter_mut().find(|i| i.kind == kind) {
            instance.minimized = false;
        } else {
            let offset = self.instances.len() as i32 * SPAWN_OFFSET_STEP;
            let position = kind.default_position().offset(offset, offset);
            self.instances.push(ToolInstance {
                kind,
                position,
                minimized: false,
                z_order: 0,
                state: ToolState::for_kind(kind),
            });
            debug!("event=tool_open module=windows tool={}", kind.key());
        }
        self.focus(kind);
    }

    /// Closes a tool; its engine state is dropped immediately.
    pub fn close(&mut self, kind: ToolKind) -> bool {
        let before = self.instances.len();
        self.instances.retain(|instance| instance.kind != kind);
        let removed = self.instances.len() != before;
        if removed {
            // A drag on the closed window is stale; drop it.
            if self.drag.map(|drag| drag.target) == Some(kind) {
                self.drag = None;
            }
            debug!("event=tool_close module=windows tool={}", kind.key());
        }
        removed
    }

    /// Flips minimized state; engine state keeps running either way.
    pub fn toggle_minimize(&mut self, kind: ToolKind) -> bool {
        match self.instances.iter_mut().find(|i| i.kind == kind) {
            Some(instance) => {
                instance.minimized = !instance.minimized;
                true
            }
            None => false,
        }
    }

    /// Raises the window above every other open window.
    pub fn focus(&mut self, kind: ToolKind) -> bool {
        match self.instances.iter_mut().find(|i| i.kind == kind) {
            Some(instance) => {
                self.next_z += 1;
                instance.z_order = self.next_z;
                true
            }
            None => false,
        }
    }

    /// Pointer-down on a window header: focus it and start a drag.
    pub fn begin_drag(&mut self, kind: ToolKind, pointer: Position) -> bool {
        let Some(window) = self
            .instances
            .iter()
            .find(|i| i.kind == kind)
            .map(|i| i.position)
        else {
            return false;
        };
        self.focus(kind);
        self.drag = Some(DragSession::begin(kind, pointer, window));
        true
    }

    /// Pointer-move anywhere on the page while a drag is active.
    pub fn drag_to(&mut self, pointer: Position) {
        let Some(drag) = self.drag else {
            return;
        };
        let position = drag.window_position_for(pointer);
        if let Some(instance) = self.instances.iter_mut().find(|i| i.kind == drag.target) {
            instance.position = position;
        }
    }

    /// Pointer-up anywhere on the page; ending without a drag is a no-op.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Delivers one second to every open instance's engine.
    ///
    /// Minimized windows tick too; only closing stops an engine.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for instance in &mut self.instances {
            match &mut instance.state {
                ToolState::FocusTimer(timer) => {
                    if let Some(FocusTimerEvent::SessionEnded) = timer.tick() {
                        events.push(SessionEvent::FocusSessionEnded);
                    }
                }
                ToolState::Stopwatch(stopwatch) => stopwatch.tick(),
                ToolState::Pomodoro(pomodoro) => match pomodoro.tick() {
                    Some(PomodoroEvent::PhaseStarted(phase)) => {
                        events.push(SessionEvent::PomodoroPhaseStarted(phase));
                    }
                    Some(PomodoroEvent::CyclesCompleted) => {
                        events.push(SessionEvent::PomodoroCyclesCompleted);
                    }
                    None => {}
                },
                ToolState::Notebook
                | ToolState::Tasks
                | ToolState::Mood(_)
                | ToolState::FutureMessages
                | ToolState::Settings => {}
            }
        }
        events
    }

    /// The open instance currently on top, if any.
    pub fn top(&self) -> Option<&ToolInstance> {
        self.instances.iter().max_by_key(|i| i.z_order)
    }

    pub fn get(&self, kind: ToolKind) -> Option<&ToolInstance> {
        self.instances.iter().find(|i| i.kind == kind)
    }

    pub fn get_mut(&mut self, kind: ToolKind) -> Option<&mut ToolInstance> {
        self.instances.iter_mut().find(|i| i.kind == kind)
    }

    pub fn is_open(&self, kind: ToolKind) -> bool {
        self.get(kind).is_some()
    }

    /// Open instances in creation order.
    pub fn instances(&self) -> &[ToolInstance] {
        &self.instances
    }

    pub fn open_count(&self) -> usize {
        self.instances.len()
    }
}
