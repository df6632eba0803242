//! Test fixtures: project trees and fake executables

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Creates a project directory (with the `.clasp.json` marker) at
/// `root/projects/<rel_path>`
pub fn create_project(root: &Path, rel_path: &str) -> Result<PathBuf> {
    let path = root.join("projects").join(rel_path);
    std::fs::create_dir_all(&path)?;
    std::fs::write(path.join(".clasp.json"), r#"{"scriptId":"test-script"}"#)?;
    Ok(path)
}

/// Creates a plain (non-project) directory below `root/projects`
pub fn create_plain_dir(root: &Path, rel_path: &str) -> Result<PathBuf> {
    let path = root.join("projects").join(rel_path);
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Writes an executable shell script named `name` into `dir`
#[cfg(unix)]
pub fn write_fake_tool(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    let mut perms = std::fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms)?;
    Ok(path)
}

/// Prepends `dir` to PATH so fake tools shadow real ones
/// Returns the previous PATH value for restoration
pub fn prepend_path(dir: &Path) -> String {
    let old = std::env::var("PATH").unwrap_or_default();
    std::env::set_var("PATH", format!("{}:{}", dir.display(), old));
    old
}

/// Restores a PATH value captured by `prepend_path`
pub fn restore_path(old: String) {
    std::env::set_var("PATH", old);
}

/// Switches the current directory and PATH for one test, restoring both
/// on drop even when an assertion panics mid-test
pub struct EnvGuard {
    original_dir: PathBuf,
    original_path: String,
}

impl EnvGuard {
    pub fn enter(dir: &Path, tools_dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current dir");
        let original_path = prepend_path(tools_dir);
        std::env::set_current_dir(dir).expect("Failed to change dir");
        Self {
            original_dir,
            original_path,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
        std::env::set_var("PATH", &self.original_path);
    }
}
