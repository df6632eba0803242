//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Returns true when a usable git binary is on PATH
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Sets up a git repository sitting on the named branch
///
/// The branch needs a commit behind it for `rev-parse --abbrev-ref HEAD`
/// to resolve, so an empty initial commit is created first.
pub fn setup_git_repo_on_branch(path: &Path, branch: &str) -> Result<()> {
    run_git(path, &["init", "-q"])?;
    run_git(path, &["config", "user.name", "Test User"])?;
    run_git(path, &["config", "user.email", "test@example.com"])?;
    run_git(path, &["config", "commit.gpgsign", "false"])?;
    run_git(path, &["commit", "--allow-empty", "-m", "init"])?;

    let head = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(path)
        .output()?;
    let current = String::from_utf8_lossy(&head.stdout).trim().to_string();
    if current != branch {
        run_git(path, &["checkout", "-q", "-b", branch])?;
    }

    Ok(())
}

fn run_git(path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}
