//! Git branch inspection for the push preflight check

use std::path::Path;

use crate::clasp::run_tool;
use crate::core::config::GIT_PROGRAM;

// Git command arguments
const GIT_REV_PARSE_HEAD_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];

/// Branches a mutating batch run may start from
pub const ALLOWED_PUSH_BRANCHES: &[&str] = &["master", "main"];

/// Verdict of the pre-run branch policy check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchPolicy {
    Allowed,
    /// Carries the branch the run was rejected on, or None when no branch
    /// could be determined at all
    Denied(Option<String>),
}

/// Returns the current branch name, or None when the query fails
pub async fn current_branch(dir: &Path) -> Option<String> {
    let output = run_tool(GIT_PROGRAM, GIT_REV_PARSE_HEAD_ARGS, dir).await;
    if output.success && !output.stdout.is_empty() {
        Some(output.stdout)
    } else {
        None
    }
}

/// Checks whether a push run is allowed from the current branch
///
/// Push mutates remote Apps Script projects, so it is restricted to the
/// allow-list; pull and list never consult this check.
pub async fn check_push_branch(dir: &Path) -> BranchPolicy {
    match current_branch(dir).await {
        Some(ref name) if ALLOWED_PUSH_BRANCHES.contains(&name.as_str()) => BranchPolicy::Allowed,
        other => BranchPolicy::Denied(other),
    }
}
