use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::io::BufReader;
use tokio::process::Child;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

use crate::RunOutput;

// Hardcode these since it does not seem worth including the libc crate
// just for them.
const SIGKILL_CODE: i32 = 9;
const EXIT_CODE_SIGNAL_BASE: i32 = 128; // conventional shell: 128 + signal

// I/O buffer sizing
const READ_CHUNK_SIZE: usize = 8192; // bytes per read
const OUTPUT_BUFFER_INITIAL_CAPACITY: usize = 8 * 1024;

/// Per-run spawn options. The environment map is applied on top of the
/// inherited parent environment.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub cwd: Option<PathBuf>,
    pub env: HashMap<String, String>,
}

/// Spawn `command` with `args` and wait for it to exit, capturing both
/// output streams in full.
///
/// Never returns an error: a process that could not be started comes back
/// as a [`RunOutput`] with [`crate::SPAWN_FAILED_EXIT_CODE`] and no
/// output, so call sites handle exactly one shape. Cancelling `cancel`
/// kills the child best-effort and reports 128 + SIGKILL; the child is
/// deliberately not killed when the returned future is merely dropped.
pub async fn run(
    command: &Path,
    args: &[String],
    opts: RunOptions,
    cancel: CancellationToken,
) -> RunOutput {
    let mut cmd = Command::new(command);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .envs(&opts.env);
    if let Some(cwd) = &opts.cwd {
        cmd.current_dir(cwd);
    }

    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!(command = %command.display(), %err, "failed to spawn process");
            return RunOutput::spawn_failed();
        }
    };
    debug!(command = %command.display(), pid = child.id(), "spawned process");

    capture(child, cancel).await
}

/// Drive the child, cancellation, and both pipes concurrently, buffering
/// all output until the process exits and both pipes are drained.
async fn capture(mut child: Child, cancel: CancellationToken) -> RunOutput {
    // Both pipes were configured with `Stdio::piped()`, so `take()` should
    // always return `Some` here.
    let (Some(stdout_pipe), Some(stderr_pipe)) = (child.stdout.take(), child.stderr.take()) else {
        warn!("stdout/stderr pipe was unexpectedly not available");
        let _ = child.start_kill();
        return RunOutput::spawn_failed();
    };

    let mut stdout_reader = BufReader::new(stdout_pipe);
    let mut stderr_reader = BufReader::new(stderr_pipe);

    let mut out_stdout: Vec<u8> = Vec::with_capacity(OUTPUT_BUFFER_INITIAL_CAPACITY);
    let mut out_stderr: Vec<u8> = Vec::with_capacity(OUTPUT_BUFFER_INITIAL_CAPACITY);

    let mut tmp_stdout = [0u8; READ_CHUNK_SIZE];
    let mut tmp_stderr = [0u8; READ_CHUNK_SIZE];

    let mut stdout_open = true;
    let mut stderr_open = true;

    let mut child_finished = false;
    let mut killed = false;
    let mut io_failed = false;
    let mut exit_status: Option<ExitStatus> = None;

    while (stdout_open || stderr_open) || !child_finished {
        tokio::select! {
            // Caller-requested termination
            _ = cancel.cancelled(), if !killed && !child_finished => {
                let _ = child.start_kill();
                killed = true;
            }

            // Process exit
            res = child.wait(), if !child_finished => {
                match res {
                    Ok(status) => exit_status = Some(status),
                    Err(err) => {
                        warn!(%err, "failed waiting for process");
                        io_failed = true;
                    }
                }
                child_finished = true;
            }

            // Stdout chunk
            read = stdout_reader.read(&mut tmp_stdout), if stdout_open => {
                match read {
                    Ok(0) => stdout_open = false,
                    Ok(n) => out_stdout.extend_from_slice(&tmp_stdout[..n]),
                    Err(err) => {
                        warn!(%err, "stdout read failed");
                        stdout_open = false;
                        io_failed = true;
                    }
                }
            }

            // Stderr chunk
            read = stderr_reader.read(&mut tmp_stderr), if stderr_open => {
                match read {
                    Ok(0) => stderr_open = false,
                    Ok(n) => out_stderr.extend_from_slice(&tmp_stderr[..n]),
                    Err(err) => {
                        warn!(%err, "stderr read failed");
                        stderr_open = false;
                        io_failed = true;
                    }
                }
            }
        }
    }

    let (exit_code, exited_normally) = match exit_status {
        Some(status) => decode_exit(status),
        None => (crate::SPAWN_FAILED_EXIT_CODE, false),
    };
    let cacheable = exited_normally && !killed && !io_failed;
    debug!(exit_code, cacheable, "process finished");

    RunOutput::from_bytes(exit_code, &out_stdout, &out_stderr, cacheable)
}

/// Exit code plus whether the process terminated normally. A child killed
/// by a signal reports the conventional 128 + signal and is not considered
/// a normal termination.
#[cfg(unix)]
fn decode_exit(status: ExitStatus) -> (i32, bool) {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => (EXIT_CODE_SIGNAL_BASE + signal, false),
        None => (
            status.code().unwrap_or(crate::SPAWN_FAILED_EXIT_CODE),
            true,
        ),
    }
}

#[cfg(not(unix))]
fn decode_exit(status: ExitStatus) -> (i32, bool) {
    (
        status.code().unwrap_or(crate::SPAWN_FAILED_EXIT_CODE),
        true,
    )
}
