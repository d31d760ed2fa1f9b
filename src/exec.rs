use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::Context as _;

use crate::command::CommandLine;
use crate::foundation::error::{HtmlpressError, HtmlpressResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured streams of a successfully finished renderer process.
#[derive(Debug)]
pub(crate) struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run `cmd` to completion, capturing both streams and enforcing `timeout`.
///
/// The argument vector is handed to the OS directly; the rendered command
/// string only travels in diagnostics. A process still running when the
/// deadline expires is killed and reported as failed. Zero exit status is the
/// only success condition.
pub(crate) fn run_command(cmd: &CommandLine, timeout: Duration) -> HtmlpressResult<ProcessOutput> {
    let rendered = cmd.to_string();
    tracing::debug!(command = %rendered, "spawning renderer");

    let mut child = Command::new(cmd.program())
        .args(cmd.arg_tokens())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| HtmlpressError::SpawnFailed {
            command: rendered.clone(),
            source,
        })?;

    // Drained off-thread; a full pipe buffer would deadlock the wait loop.
    let stdout_drain = child.stdout.take().map(spawn_drain);
    let stderr_drain = child.stderr.take().map(spawn_drain);

    let deadline = Instant::now() + timeout;
    let (status, timed_out) = loop {
        let polled = child
            .try_wait()
            .with_context(|| format!("wait for renderer (command: {rendered})"))?;
        if let Some(status) = polled {
            break (Some(status), false);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            break (child.wait().ok(), true);
        }
        std::thread::sleep(POLL_INTERVAL);
    };

    let stdout = join_drain(stdout_drain);
    let stderr = join_drain(stderr_drain);

    match status {
        Some(status) if status.success() && !timed_out => Ok(ProcessOutput { stdout, stderr }),
        _ => Err(HtmlpressError::ProcessFailed {
            code: status.as_ref().and_then(ExitStatus::code),
            stdout,
            stderr,
            command: rendered,
            timed_out,
        }),
    }
}

type DrainHandle = std::thread::JoinHandle<std::io::Result<Vec<u8>>>;

fn spawn_drain<R: Read + Send + 'static>(mut stream: R) -> DrainHandle {
    std::thread::spawn(move || {
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        Ok(bytes)
    })
}

// Streams are diagnostics only; a failed drain degrades to an empty capture.
fn join_drain(handle: Option<DrainHandle>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .and_then(|r| r.ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
