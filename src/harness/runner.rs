//! Target program execution
//!
//! Spawns the program under test with stdout captured and a hard wall-clock
//! budget. A program that outlives the budget is killed and reported as a
//! timeout; its partial output is discarded.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command as TokioCommand;

use crate::common::{Error, Result};

/// Run the target program and return its stdout split into lines
///
/// The program is invoked with no arguments. The captured output is trimmed
/// once as a whole (stray leading/trailing blank lines and the final
/// terminator), then split on newlines; individual lines are left untouched
/// so embedded whitespace still fails validation.
pub async fn run_target(program: &Path, timeout_secs: u64) -> Result<Vec<String>> {
    tracing::debug!(program = %program.display(), timeout_secs, "spawning target");

    let mut child = TokioCommand::new(program)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::target_not_found(&[program.display().to_string()]),
            _ => Error::Execution(e.to_string()),
        })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Execution("failed to capture stdout".to_string()))?;

    let wait = async {
        let mut buf = Vec::new();
        let mut stdout = stdout;
        tokio::io::AsyncReadExt::read_to_end(&mut stdout, &mut buf).await?;
        child.wait().await?;
        Ok::<Vec<u8>, std::io::Error>(buf)
    };

    let raw = match tokio::time::timeout(Duration::from_secs(timeout_secs), wait).await {
        Ok(Ok(buf)) => buf,
        Ok(Err(e)) => return Err(Error::Execution(e.to_string())),
        Err(_) => return Err(Error::Timeout(timeout_secs)),
    };

    Ok(split_output(&String::from_utf8_lossy(&raw)))
}

/// Split captured output into lines, trimming only at the whole-output level
fn split_output(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(|l| l.to_string()).collect()
}
