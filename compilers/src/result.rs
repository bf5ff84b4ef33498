use serde::Deserialize;
use serde::Serialize;
use winbridge_exec::OutputLine;
use winbridge_exec::RunOutput;

/// Normalized outcome of one remote compiler invocation, consumed by the
/// diagnostics and caching layers as JSON. A compiler error (non-zero
/// `code`) has exactly the same shape as a success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Exit code of the compiler process, verbatim.
    pub code: i32,
    /// Advisory: true when the process terminated normally, so the result
    /// is deterministic enough for the caching collaborator to memoize.
    pub ok_to_cache: bool,
    /// The translated working path the invocation actually used, in the
    /// remote namespace's convention.
    pub input_filename: String,
    pub stdout: Vec<OutputLine>,
    pub stderr: Vec<OutputLine>,
}

impl ExecutionResult {
    pub(crate) fn from_run(output: RunOutput, input_filename: String) -> Self {
        Self {
            code: output.exit_code,
            ok_to_cache: output.cacheable,
            input_filename,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}
