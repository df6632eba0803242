//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::{
    create_plain_dir, create_project, prepend_path, restore_path, EnvGuard,
};
pub use self::git::{is_git_available, setup_git_repo_on_branch};

#[cfg(unix)]
pub use self::fixtures::write_fake_tool;

use std::sync::{Mutex, MutexGuard, OnceLock};

static TEST_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Acquires a global lock for tests that modify process-wide state
/// (current directory, PATH)
pub fn lock_test() -> MutexGuard<'static, ()> {
    match TEST_MUTEX.get_or_init(|| Mutex::new(())).lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
