//! Chunked batch execution of an external tool across projects
//!
//! Projects are partitioned into consecutive chunks of `concurrency` size.
//! Chunks run strictly one after another; within a chunk every project runs
//! concurrently and the scheduler waits for the whole chunk before moving
//! on, so the number of live subprocesses never exceeds the chunk size.

use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::MultiProgress;
use std::time::{Duration, Instant};

use super::discovery::Project;
use super::progress::{create_chunk_header_bar, create_progress_bar, create_progress_style};
use super::report::{chunk_header, task_message, task_prefix};
use crate::clasp::{run_tool, ToolOutput};

/// Result of running the tool against one project
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub project: Project,
    /// Wall-clock time around the full subprocess lifetime
    pub elapsed: Duration,
    pub output: ToolOutput,
}

impl TaskOutcome {
    pub fn success(&self) -> bool {
        self.output.success
    }

    /// One-line failure diagnostic
    pub fn diagnostic(&self) -> &str {
        self.output.first_error_line()
    }
}

/// Aggregate over all task outcomes of one batch run
///
/// The two sequences partition the outcomes: chunks in scheduling order,
/// tasks within a chunk in completion order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub succeeded: Vec<TaskOutcome>,
    pub failed: Vec<TaskOutcome>,
}

impl BatchResult {
    fn record(&mut self, outcome: TaskOutcome) {
        if outcome.success() {
            self.succeeded.push(outcome);
        } else {
            self.failed.push(outcome);
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Number of chunks a batch of `count` projects yields at a given chunk size
pub(crate) fn chunk_count(count: usize, concurrency: usize) -> usize {
    count.div_ceil(concurrency.max(1))
}

/// Runs `program args` once per project, chunk by chunk
///
/// Every project is attempted regardless of earlier failures; failures are
/// only recorded, never raised. Progress is rendered as it happens: a
/// header line per chunk plus one bar per project, finished with a
/// success/failure marker, the elapsed seconds, and the first diagnostic
/// line when the task failed.
pub async fn run_batch(
    projects: Vec<Project>,
    program: &str,
    args: &[&str],
    concurrency: usize,
) -> BatchResult {
    let concurrency = concurrency.max(1);
    let total_chunks = chunk_count(projects.len(), concurrency);
    let max_name_length = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);

    let multi_progress = MultiProgress::new();
    let progress_style = create_progress_style();
    // Finished bars stay visible as long as their handles live
    let mut header_bars = Vec::with_capacity(total_chunks);

    let mut result = BatchResult::default();

    for (index, chunk) in projects.chunks(concurrency).enumerate() {
        header_bars.push(create_chunk_header_bar(
            &multi_progress,
            &chunk_header(index, total_chunks, chunk),
        ));

        let mut tasks = FuturesUnordered::new();
        for project in chunk {
            let progress_bar =
                create_progress_bar(&multi_progress, &progress_style, &project.name);

            tasks.push(async move {
                let started = Instant::now();
                let output = run_tool(program, args, &project.path).await;
                let outcome = TaskOutcome {
                    project: project.clone(),
                    elapsed: started.elapsed(),
                    output,
                };
                (outcome, progress_bar)
            });
        }

        // Drain the chunk: every task finishes (success or failure) before
        // the next chunk starts, in whatever order they complete
        while let Some((outcome, progress_bar)) = tasks.next().await {
            progress_bar.set_prefix(task_prefix(&outcome, max_name_length));
            progress_bar.set_message(task_message(&outcome));
            progress_bar.finish();
            result.record(outcome);
        }
    }

    result
}
