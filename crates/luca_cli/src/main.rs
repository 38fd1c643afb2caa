//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `luca_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use luca_core::clock::SystemClock;
use luca_core::session::StudySession;
use luca_core::storage::MemoryKvStorage;
use luca_core::ToolKind;

fn main() {
    println!("luca_core version={}", luca_core::core_version());

    match StudySession::start(MemoryKvStorage::new(), SystemClock) {
        Ok(mut session) => {
            session.open_tool(ToolKind::FocusTimer);
            println!("session open_tools={}", session.windows().open_count());
        }
        Err(err) => {
            eprintln!("session start failed: {err}");
            std::process::exit(1);
        }
    }
}
