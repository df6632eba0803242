//! # clasp-runner
//!
//! `clasp-runner` is a library for running the `clasp` CLI across many Google
//! Apps Script projects concurrently. It powers the `clasp-runner` binary.
//!
//! ## Core Features
//!
//! - **Project Discovery**: Parallel scanning for `.clasp.json` project roots
//!   below a `projects/` directory.
//! - **Bounded Concurrency**: Projects are processed in fixed-size chunks;
//!   chunks run one after another, projects inside a chunk run concurrently.
//! - **Failure Isolation**: One failing project never aborts the batch; every
//!   outcome lands in an aggregate result.
//! - **Branch Guard**: Mutating (push) runs are restricted to master/main.
//!
//! ## Example
//!
//! ```rust,no_run
//! use clasp_runner::core::find_projects_from_path;
//! use std::collections::BTreeSet;
//!
//! let projects = find_projects_from_path(".", 3, &BTreeSet::new());
//! for project in projects {
//!     println!("{}: {}", project.name, project.path.display());
//! }
//! ```

pub mod clasp;
pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
