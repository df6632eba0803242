//! Rendering of batch progress lines and the final summary

use std::time::Duration;

use super::batch::{BatchResult, TaskOutcome};
use super::config::SUMMARY_RULE_WIDTH;
use super::discovery::Project;

const SUCCESS_SYMBOL: &str = "🟢";
const FAILURE_SYMBOL: &str = "🔴";

/// Header line announcing one chunk: `[Chunk 2/5] alpha, beta, gamma`
pub(crate) fn chunk_header(index: usize, total_chunks: usize, chunk: &[Project]) -> String {
    let names: Vec<&str> = chunk.iter().map(|p| p.name.as_str()).collect();
    format!("[Chunk {}/{}] {}", index + 1, total_chunks, names.join(", "))
}

/// Progress-bar prefix for a finished task: marker plus aligned project name
pub(crate) fn task_prefix(outcome: &TaskOutcome, width: usize) -> String {
    let symbol = if outcome.success() {
        SUCCESS_SYMBOL
    } else {
        FAILURE_SYMBOL
    };
    format!("{} {:width$}", symbol, outcome.project.name, width = width)
}

/// Progress-bar message for a finished task: elapsed seconds plus the first
/// diagnostic line when the task failed
pub(crate) fn task_message(outcome: &TaskOutcome) -> String {
    let elapsed = format!("{:.1}s", outcome.elapsed.as_secs_f32());
    if outcome.success() {
        elapsed
    } else {
        format!("{}   {}", elapsed, outcome.diagnostic())
    }
}

/// One-line roll-up shown above the final summary
pub fn render_rollup(result: &BatchResult, duration: Duration) -> String {
    format!(
        "✅ Completed in {:.1}s • {} succeeded • {} failed",
        duration.as_secs_f64(),
        result.succeeded.len(),
        result.failed.len()
    )
}

/// Final two-section summary listing succeeded and failed project names
///
/// Failed projects carry their first diagnostic line.
pub fn render_summary(result: &BatchResult) -> String {
    let mut lines = Vec::new();

    if !result.succeeded.is_empty() {
        lines.push(format!("🟢 SUCCEEDED ({})", result.succeeded.len()));
        for (i, outcome) in result.succeeded.iter().enumerate() {
            let tree_char = if i == result.succeeded.len() - 1 {
                "└─"
            } else {
                "├─"
            };
            lines.push(format!("   {} {}", tree_char, outcome.project.name));
        }
    }

    if !result.failed.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("🔴 FAILED ({})", result.failed.len()));
        for (i, outcome) in result.failed.iter().enumerate() {
            let tree_char = if i == result.failed.len() - 1 {
                "└─"
            } else {
                "├─"
            };
            lines.push(format!(
                "   {} {:20} # {}",
                tree_char,
                outcome.project.name,
                outcome.diagnostic()
            ));
        }
    }

    lines.join("\n")
}

/// Prints the roll-up and the final summary wrapped in horizontal rules
pub fn print_summary(result: &BatchResult, duration: Duration) {
    println!("{}", render_rollup(result, duration));

    let summary = render_summary(result);
    if !summary.is_empty() {
        println!("\n{}", "━".repeat(SUMMARY_RULE_WIDTH));
        println!("{}", summary);
        println!("{}", "━".repeat(SUMMARY_RULE_WIDTH));
    }
    println!();
}
