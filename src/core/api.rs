//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Project discovery
//! - Chunked batch execution
//! - Concurrency resolution
//! - Result reporting
//!
//! Internal implementation details are not exposed through this API.

// Core types
pub use super::batch::{run_batch, BatchResult, TaskOutcome};

// Discovery
pub use super::discovery::{find_projects, find_projects_from_path, scan_projects, Project};

// Configuration
pub use super::config::{
    resolve_concurrency, CLASP_PROGRAM, DEFAULT_PARALLEL_JOBS, DEFAULT_SCAN_DEPTH,
    PARALLEL_JOBS_ENV, PROJECTS_DIR, PROJECT_MARKER_FILE,
};

// User-facing messages
pub use super::config::{NO_PROJECTS_MESSAGE, SCANNING_MESSAGE};

// Reporting
pub use super::report::{print_summary, render_rollup, render_summary};

// Internal helpers for command modules
pub(crate) use super::batch::chunk_count;
