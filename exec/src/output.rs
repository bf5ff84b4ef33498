use serde::Deserialize;
use serde::Serialize;

/// One line of captured process output. Kept as a record rather than a
/// bare string because the API layer renders diagnostics per line and
/// attaches metadata downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
}

impl OutputLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// What one finished (or failed-to-start) process run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// OS exit code, passed through verbatim. 128 + signal for a child
    /// killed by a signal, [`crate::SPAWN_FAILED_EXIT_CODE`] when the
    /// process never started.
    pub exit_code: i32,
    pub stdout: Vec<OutputLine>,
    pub stderr: Vec<OutputLine>,
    /// True only when the process terminated normally, making the result
    /// deterministic enough for a caller to memoize. A non-zero exit code
    /// alone does not clear this flag; kills and spawn failures do.
    pub cacheable: bool,
}

impl RunOutput {
    pub(crate) fn from_bytes(exit_code: i32, stdout: &[u8], stderr: &[u8], cacheable: bool) -> Self {
        Self {
            exit_code,
            stdout: split_lines(stdout),
            stderr: split_lines(stderr),
            cacheable,
        }
    }

    pub(crate) fn spawn_failed() -> Self {
        Self {
            exit_code: crate::SPAWN_FAILED_EXIT_CODE,
            stdout: Vec::new(),
            stderr: Vec::new(),
            cacheable: false,
        }
    }
}

fn split_lines(bytes: &[u8]) -> Vec<OutputLine> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(OutputLine::new)
        .collect()
}
