//! Domain models shared across the session core.

pub mod mood;
pub mod note;
pub mod settings;
pub mod task;
pub mod tool;
