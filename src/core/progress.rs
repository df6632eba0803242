//! Progress bar construction helpers

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use super::config::{DEFAULT_PROGRESS_BAR_LENGTH, PROGRESS_CHARS, PROGRESS_TEMPLATE};

/// Creates and configures a progress bar for one project task
/// Returns a configured ProgressBar with the specified project name
pub(crate) fn create_progress_bar(
    multi: &MultiProgress,
    style: &ProgressStyle,
    project_name: &str,
) -> ProgressBar {
    let pb = multi.add(ProgressBar::new(DEFAULT_PROGRESS_BAR_LENGTH));
    pb.set_style(style.clone());
    pb.set_prefix(format!("🟡 {}", project_name));
    pb.set_message("running...");
    pb
}

/// Creates the shared progress bar style
pub(crate) fn create_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .expect("Failed to create progress style - this indicates an invalid template string")
        .progress_chars(PROGRESS_CHARS)
}

/// Adds a finished bar that renders a chunk header line above its tasks
pub(crate) fn create_chunk_header_bar(multi: &MultiProgress, text: &str) -> ProgressBar {
    let header_pb = multi.add(ProgressBar::new(0));
    header_pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}")
            .expect("Failed to create header style - this indicates an invalid template string"),
    );
    header_pb.finish_with_message(text.to_string());
    header_pb
}
