//! Batch push/pull command implementation
//!
//! This module handles the core batch functionality - discovering clasp
//! projects, validating the requested selection, and running the external
//! tool across every selected project chunk by chunk.

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::{
    chunk_count, find_projects, print_summary, run_batch, scan_projects, Project, CLASP_PROGRAM,
    NO_PROJECTS_MESSAGE, PROJECTS_DIR,
};
use crate::git::{check_push_branch, BranchPolicy};
use crate::utils::{set_terminal_title, set_terminal_title_and_flush};

/// The clasp subcommand a batch run forwards to every project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    Push,
    Pull,
}

impl ToolCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolCommand::Push => "push",
            ToolCommand::Pull => "pull",
        }
    }

    /// Arguments passed to the external tool for this command
    pub fn tool_args(self, force: bool) -> Vec<&'static str> {
        let mut args = vec![self.as_str()];
        if self == ToolCommand::Push && force {
            args.push("--force");
        }
        args
    }
}

/// Immutable configuration for one batch run, built once from parsed CLI
/// arguments before any side-effecting work starts
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub command: ToolCommand,
    /// Chunk size; always >= 1 after resolution
    pub jobs: usize,
    /// Requested project names; empty selects every discovered project
    pub requested: BTreeSet<String>,
    /// Forwarded to the tool as --force (push only)
    pub force: bool,
}

/// Selection problems detected after discovery, before any subprocess runs
#[derive(Debug, Default, PartialEq, Eq)]
struct SelectionReport {
    /// Requested names that matched no discovered project
    unknown: Vec<String>,
    /// Requested names that matched more than one discovered path
    ambiguous: Vec<(String, Vec<PathBuf>)>,
}

impl SelectionReport {
    fn is_clean(&self) -> bool {
        self.unknown.is_empty() && self.ambiguous.is_empty()
    }
}

/// Checks that every requested name resolves to exactly one project
fn validate_selection(requested: &BTreeSet<String>, projects: &[Project]) -> SelectionReport {
    let mut report = SelectionReport::default();

    for name in requested {
        let matches: Vec<PathBuf> = projects
            .iter()
            .filter(|p| &p.name == name)
            .map(|p| p.path.clone())
            .collect();
        match matches.len() {
            0 => report.unknown.push(name.clone()),
            1 => {}
            _ => report.ambiguous.push((name.clone(), matches)),
        }
    }

    report
}

/// Handles a batch push or pull run
///
/// Returns Ok(true) when every selected project succeeded (including the
/// nothing-to-do case), Ok(false) when the run failed or was rejected
/// before starting.
pub async fn handle_run_command(request: RunRequest) -> Result<bool> {
    // Set terminal title to indicate clasp-runner is running
    set_terminal_title("🚀 clasp-runner");

    // Push mutates remote Apps Script projects; require a release branch
    // before touching anything
    if request.command == ToolCommand::Push {
        if let BranchPolicy::Denied(branch) = check_push_branch(Path::new(".")).await {
            match branch {
                Some(name) => eprintln!("Error: Can't push from branch '{name}'"),
                None => eprintln!("Error: Can't determine the current branch"),
            }
            eprintln!("Push is only allowed from master or main branch.");
            set_terminal_title_and_flush("✅ clasp-runner");
            return Ok(false);
        }
    }

    let (start_time, projects) = scan_projects(&request.requested).await;

    // Requested names must resolve uniquely before any subprocess starts
    if !request.requested.is_empty() {
        let report = validate_selection(&request.requested, &projects);
        if !report.is_clean() {
            println!();
            report_selection_errors(&report).await;
            set_terminal_title_and_flush("✅ clasp-runner");
            return Ok(false);
        }
    }

    if projects.is_empty() {
        println!("\r{NO_PROJECTS_MESSAGE}                    ");
        set_terminal_title_and_flush("✅ clasp-runner");
        return Ok(true);
    }

    let tool_args = request.command.tool_args(request.force);
    let total = projects.len();
    let project_word = if total == 1 { "project" } else { "projects" };
    print!(
        "\r🚀 Running: clasp {}                    \n",
        tool_args.join(" ")
    );
    println!();
    println!("Found {total} {project_word}");
    println!("Concurrency: {}", request.jobs);
    println!("Chunks: {}", chunk_count(total, request.jobs));
    println!();

    let result = run_batch(projects, CLASP_PROGRAM, &tool_args, request.jobs).await;

    print_summary(&result, start_time.elapsed());

    // Set terminal title to green checkbox to indicate completion
    set_terminal_title_and_flush("✅ clasp-runner");

    Ok(result.all_succeeded())
}

/// Reports unknown and ambiguous project names with the valid alternatives
async fn report_selection_errors(report: &SelectionReport) {
    if !report.unknown.is_empty() {
        eprintln!("Error: Unknown project(s): {}", report.unknown.join(", "));

        // A second, unfiltered scan so the message can list what exists
        let available = tokio::task::spawn_blocking(|| find_projects(&BTreeSet::new()))
            .await
            .unwrap_or_default();
        if available.is_empty() {
            eprintln!("No projects are available under ./{PROJECTS_DIR}.");
        } else {
            let names: Vec<&str> = available.iter().map(|p| p.name.as_str()).collect();
            eprintln!("Available projects: {}", names.join(", "));
        }
    }

    for (name, paths) in &report.ambiguous {
        eprintln!("Error: Project name '{name}' is ambiguous; it matches:");
        for path in paths {
            eprintln!("  {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, path: &str) -> Project {
        Project {
            name: name.to_string(),
            path: PathBuf::from(path),
        }
    }

    fn requested(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tool_args_for_each_command() {
        assert_eq!(ToolCommand::Push.tool_args(false), vec!["push"]);
        assert_eq!(ToolCommand::Push.tool_args(true), vec!["push", "--force"]);
        assert_eq!(ToolCommand::Pull.tool_args(false), vec!["pull"]);
        // --force is a push-only flag, pull never forwards it
        assert_eq!(ToolCommand::Pull.tool_args(true), vec!["pull"]);
    }

    #[test]
    fn test_selection_is_clean_when_every_name_matches_once() {
        let projects = vec![project("alpha", "/p/alpha"), project("beta", "/p/beta")];

        let report = validate_selection(&requested(&["alpha", "beta"]), &projects);

        assert!(report.is_clean());
    }

    #[test]
    fn test_unknown_names_are_reported() {
        let projects = vec![project("alpha", "/p/alpha")];

        let report = validate_selection(&requested(&["alpha", "ghost"]), &projects);

        assert_eq!(report.unknown, vec!["ghost".to_string()]);
        assert!(report.ambiguous.is_empty());
    }

    #[test]
    fn test_ambiguous_names_list_every_matching_path() {
        let projects = vec![
            project("app", "/p/team-a/app"),
            project("app", "/p/team-b/app"),
            project("other", "/p/other"),
        ];

        let report = validate_selection(&requested(&["app"]), &projects);

        assert!(report.unknown.is_empty());
        assert_eq!(report.ambiguous.len(), 1);
        let (name, paths) = &report.ambiguous[0];
        assert_eq!(name, "app");
        assert_eq!(paths.len(), 2);
    }
}
