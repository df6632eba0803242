//! Project listing command implementation
//!
//! `list` runs the same discovery as push/pull, just with an empty filter,
//! and prints what it finds.

use anyhow::Result;
use std::collections::BTreeSet;

use crate::core::{scan_projects, NO_PROJECTS_MESSAGE};

/// Handles the project list command
pub async fn handle_list_command() -> Result<bool> {
    let (_start_time, projects) = scan_projects(&BTreeSet::new()).await;

    if projects.is_empty() {
        println!("\r{NO_PROJECTS_MESSAGE}                    ");
        return Ok(true);
    }

    let total = projects.len();
    let project_word = if total == 1 { "project" } else { "projects" };
    let max_name_length = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);

    print!("\r📜 {total} {project_word}                    \n");
    println!();
    for project in &projects {
        println!(
            "  {:width$}  {}",
            project.name,
            project.path.display(),
            width = max_name_length
        );
    }
    println!();

    Ok(true)
}
