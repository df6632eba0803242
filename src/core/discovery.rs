//! Project discovery under the `projects/` root

use dashmap::DashMap;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::config::{
    DEFAULT_SCAN_DEPTH, ESTIMATED_PROJECT_COUNT, PROJECTS_DIR, PROJECT_MARKER_FILE,
    SCANNING_MESSAGE, UNKNOWN_PROJECT_NAME,
};

/// One discovered Apps Script project: a directory that directly contains
/// the `.clasp.json` marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Short name, the last path segment of the project directory
    pub name: String,
    /// Full path to the project directory
    pub path: PathBuf,
}

impl Project {
    fn from_dir(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(UNKNOWN_PROJECT_NAME)
            .to_string();
        Self {
            name,
            path: path.to_path_buf(),
        }
    }
}

/// Recursively searches for clasp projects below `root/projects`
/// Returns the discovered projects sorted by name (case-insensitive)
///
/// A directory counts as a project iff it directly contains the marker
/// file. Project directories are leaves of the search: their own
/// subdirectories are never descended into, since a project cannot nest
/// another project. Directories nested more than `max_depth` levels below
/// `projects/` are not recursed into.
///
/// When `filter` is non-empty, only directories whose base name is a member
/// of the set are collected; non-matching directories are still traversed
/// so that nested matches are found.
///
/// A missing `root/projects` directory yields an empty result, not an error.
pub fn find_projects_from_path(
    root: impl AsRef<Path>,
    max_depth: usize,
    filter: &BTreeSet<String>,
) -> Vec<Project> {
    let projects_root = root.as_ref().join(PROJECTS_DIR);
    if !projects_root.is_dir() {
        return Vec::new();
    }

    // DashMap keyed by path gives lock-free collection across walker threads
    let found: Arc<DashMap<PathBuf, String>> =
        Arc::new(DashMap::with_capacity(ESTIMATED_PROJECT_COUNT));
    let found_clone = Arc::clone(&found);
    let filter_clone = filter.clone();

    // The marker directory itself may sit one level below the recursion
    // bound, so the walker is allowed one extra level.
    let walker = WalkBuilder::new(&projects_root)
        .follow_links(false)
        .max_depth(Some(max_depth + 1))
        .threads(num_cpus::get().min(8))
        .standard_filters(false) // plain directory walk, no ignore-file semantics
        .filter_entry(move |entry| {
            // The projects root itself is never a project
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return false;
            }

            let path = entry.path();
            if path.join(PROJECT_MARKER_FILE).is_file() {
                let project = Project::from_dir(path);
                if filter_clone.is_empty() || filter_clone.contains(&project.name) {
                    found_clone.insert(project.path, project.name);
                }
                // A project is a leaf, don't descend
                return false;
            }

            true
        })
        .build_parallel();

    // Walk the directory tree in parallel - collection happens in filter_entry
    walker.run(|| Box::new(|_| ignore::WalkState::Continue));

    let mut projects: Vec<Project> = Arc::try_unwrap(found)
        .map(|map| {
            map.into_iter()
                .map(|(path, name)| Project { name, path })
                .collect()
        })
        .unwrap_or_else(|arc| {
            // Fallback if Arc has other references (should not happen in normal flow)
            arc.iter()
                .map(|r| Project {
                    name: r.value().clone(),
                    path: r.key().clone(),
                })
                .collect()
        });

    // Sort by name (case-insensitive), then path, so scheduling order and
    // listings are deterministic even when names collide
    projects.par_sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.path.cmp(&b.path))
    });

    projects
}

/// Searches for clasp projects below `./projects`
///
/// This is a convenience wrapper around `find_projects_from_path()` that
/// searches from the current working directory at the default depth.
pub fn find_projects(filter: &BTreeSet<String>) -> Vec<Project> {
    find_projects_from_path(".", DEFAULT_SCAN_DEPTH, filter)
}

/// Common initialization for commands that scan for projects
#[must_use]
pub async fn scan_projects(filter: &BTreeSet<String>) -> (std::time::Instant, Vec<Project>) {
    println!();
    print!("{SCANNING_MESSAGE}");
    // Flush stdout - ignore errors as this is non-critical
    let _ = std::io::stdout().flush();

    let start_time = std::time::Instant::now();
    let filter = filter.clone();
    let projects = tokio::task::spawn_blocking(move || find_projects(&filter))
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error in project discovery: {e}");
            Vec::new()
        });

    (start_time, projects)
}
