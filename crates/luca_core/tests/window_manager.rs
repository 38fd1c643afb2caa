use luca_core::session::{SessionEvent, WindowManager};
use luca_core::{Position, ToolKind};

#[test]
fn top_window_tracks_the_last_focus_across_opens_and_closes() {
    let mut windows = WindowManager::new();
    windows.open(ToolKind::Notebook);
    windows.open(ToolKind::Tasks);
    windows.open(ToolKind::Stopwatch);
    assert_eq!(windows.top().unwrap().kind, ToolKind::Stopwatch);

    windows.focus(ToolKind::Notebook);
    assert_eq!(windows.top().unwrap().kind, ToolKind::Notebook);

    // Closing the top window surfaces the previous one.
    windows.close(ToolKind::Notebook);
    assert_eq!(windows.top().unwrap().kind, ToolKind::Stopwatch);

    // Reopening an open tool re-tops it instead of spawning a twin.
    windows.open(ToolKind::Tasks);
    assert_eq!(windows.top().unwrap().kind, ToolKind::Tasks);
    assert_eq!(windows.open_count(), 2);
}

#[test]
fn minimized_timer_keeps_ticking_to_completion() {
    let mut windows = WindowManager::new();
    windows.open(ToolKind::FocusTimer);
    {
        let timer = windows
            .get_mut(ToolKind::FocusTimer)
            .unwrap()
            .focus_timer_mut()
            .unwrap();
        assert!(timer.set_duration("0", "3"));
        timer.toggle();
    }
    windows.toggle_minimize(ToolKind::FocusTimer);

    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(windows.tick());
    }
    assert_eq!(events, vec![SessionEvent::FocusSessionEnded]);
    assert!(windows.get(ToolKind::FocusTimer).unwrap().minimized);
}

#[test]
fn closing_a_window_stops_its_timer_for_good() {
    let mut windows = WindowManager::new();
    windows.open(ToolKind::FocusTimer);
    {
        let timer = windows
            .get_mut(ToolKind::FocusTimer)
            .unwrap()
            .focus_timer_mut()
            .unwrap();
        assert!(timer.set_duration("0", "2"));
        timer.toggle();
    }
    assert!(windows.tick().is_empty());
    assert!(windows.close(ToolKind::FocusTimer));

    // The one remaining second never elapses.
    for _ in 0..10 {
        assert!(windows.tick().is_empty());
    }

    // Reopening starts from a fresh engine at the default duration.
    windows.open(ToolKind::FocusTimer);
    let timer = windows
        .get_mut(ToolKind::FocusTimer)
        .unwrap()
        .focus_timer_mut()
        .unwrap();
    assert_eq!(timer.remaining_seconds(), 25 * 60);
    assert!(!timer.is_running());
}

#[test]
fn drag_moves_only_the_dragged_window() {
    let mut windows = WindowManager::new();
    windows.open(ToolKind::Notebook);
    windows.open(ToolKind::Tasks);
    let tasks_before = windows.get(ToolKind::Tasks).unwrap().position;
    let notebook_before = windows.get(ToolKind::Notebook).unwrap().position;

    assert!(windows.begin_drag(ToolKind::Notebook, Position::new(200, 200)));
    windows.drag_to(Position::new(260, 180));
    windows.end_drag();

    assert_eq!(
        windows.get(ToolKind::Notebook).unwrap().position,
        notebook_before.offset(60, -20)
    );
    assert_eq!(windows.get(ToolKind::Tasks).unwrap().position, tasks_before);
    // Dragging also focused the dragged window.
    assert_eq!(windows.top().unwrap().kind, ToolKind::Notebook);
}
