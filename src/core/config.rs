//! Configuration constants and settings

// Batch Concurrency
//
// clasp operations are network-bound; a small chunk size keeps the Apps
// Script API usage friendly while still overlapping upload/download time.

/// Compiled-in default for the number of projects processed per chunk
pub const DEFAULT_PARALLEL_JOBS: usize = 3;

/// Environment variable consulted when --jobs is not given
pub const PARALLEL_JOBS_ENV: &str = "PARALLEL_JOBS";

/// Determines the chunk size for a batch run
///
/// Priority order:
/// 1. --jobs N flag → N
/// 2. PARALLEL_JOBS env var → N
/// 3. Compiled default → 3
///
/// Zero and unparseable values are skipped rather than rejected, falling
/// through to the next source in the chain.
pub fn resolve_concurrency(jobs: Option<usize>, env_value: Option<&str>) -> usize {
    if let Some(n) = jobs {
        if n > 0 {
            return n;
        }
    }

    if let Some(raw) = env_value {
        if let Ok(n) = raw.trim().parse::<usize>() {
            if n > 0 {
                return n;
            }
        }
    }

    DEFAULT_PARALLEL_JOBS
}

// External programs
pub const CLASP_PROGRAM: &str = "clasp";
pub const GIT_PROGRAM: &str = "git";

// Project discovery configuration
pub const PROJECTS_DIR: &str = "projects";
pub const PROJECT_MARKER_FILE: &str = ".clasp.json";
/// Directories nested more than this many levels below `projects/` are not
/// recursed into; a marker directory may still sit one level below the bound.
pub const DEFAULT_SCAN_DEPTH: usize = 3;
pub const ESTIMATED_PROJECT_COUNT: usize = 32; // Pre-allocation hint for collections
pub const UNKNOWN_PROJECT_NAME: &str = "unknown";

/// Exit code recorded when a subprocess could not be launched at all
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

// UI Constants
pub const NO_PROJECTS_MESSAGE: &str = "No projects found.";
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for clasp projects...";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} {wide_msg}";
pub const PROGRESS_CHARS: &str = "##-";
pub const DEFAULT_PROGRESS_BAR_LENGTH: u64 = 100;

// Display formatting constants
pub const SUMMARY_RULE_WIDTH: usize = 70;
