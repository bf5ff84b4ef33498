use thiserror::Error;

use winbridge_winpath::TranslateError;

/// Faults surfaced by `run_compiler` before a process is spawned.
///
/// Only path translation lives here: a spawn failure is a terminal
/// [`crate::ExecutionResult`] rather than an error, so that compile
/// failures, spawn failures, and successes all reach the caller in one
/// shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The working directory or an argument path could not be translated
    /// into the remote namespace. A configuration bug; nothing was run.
    #[error(transparent)]
    Translate(#[from] TranslateError),
}
