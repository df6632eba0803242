//! External tool invocation with full output capture
//!
//! Every failure mode is folded into the returned `ToolOutput`; callers
//! never see an `Err` from a tool invocation.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::config::LAUNCH_FAILURE_EXIT_CODE;

const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Captured result of one external tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// True iff the process started and exited with code 0
    pub success: bool,
    /// Captured standard output, trimmed
    pub stdout: String,
    /// Captured standard error, trimmed; on launch failure this carries the
    /// launch error message instead (the process produced no stderr)
    pub stderr: String,
    /// Process exit code; -1 when the process never started or was killed
    /// by a signal
    pub exit_code: i32,
}

impl ToolOutput {
    /// First line of the failure diagnostic, for one-line displays
    pub fn first_error_line(&self) -> &str {
        self.stderr.lines().next().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }
}

/// Runs an external command in the specified directory, capturing stdout
/// and stderr as text; standard input is not connected
///
/// This never fails: a process that cannot be launched at all (missing
/// executable, permission error) comes back as a failed `ToolOutput` with
/// the sentinel exit code and the launch error as its diagnostic.
pub async fn run_tool(program: &str, args: &[&str], dir: &Path) -> ToolOutput {
    let result = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .await;

    match result {
        Ok(output) => ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code().unwrap_or(LAUNCH_FAILURE_EXIT_CODE),
        },
        Err(e) => ToolOutput {
            success: false,
            stdout: String::new(),
            stderr: e.to_string(),
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
        },
    }
}
