//! Asynchronous single-process runner.
//!
//! Spawns exactly one external process per call, captures stdout and
//! stderr fully in memory as ordered line records, and reports the exit
//! code verbatim. There is no internal timeout; callers that want one
//! cancel the provided token, which kills the child best-effort. A process
//! whose awaiting task is abandoned without cancelling runs to completion
//! and its result is discarded.

mod output;
mod runner;
mod wsl;

pub use output::OutputLine;
pub use output::RunOutput;
pub use runner::RunOptions;
pub use runner::run;
pub use wsl::running_under_wsl;

/// Exit code reported when the process could not be spawned at all.
/// Distinct from the error channel so every call site handles one shape.
pub const SPAWN_FAILED_EXIT_CODE: i32 = -1;
