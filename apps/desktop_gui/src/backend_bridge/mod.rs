//! Bridge between the UI thread and the preference worker.

pub mod commands;
pub mod runtime;
