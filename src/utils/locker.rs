//! File-based locking to prevent overlapping pruning passes
//!
//! The OS scheduler can fire a new pass while a previous one is still blocked
//! on a slow child process. The second invocation must fail fast instead of
//! interleaving tool invocations against the same physical disks.

use anyhow::{Context, Result};
use fd_lock::RwLock;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lock guard held for the duration of one pruning pass
pub struct PassLock {
    // Store the lock and its guard together
    _lock: Box<(RwLock<File>, Option<fd_lock::RwLockWriteGuard<'static, File>>)>,
    lock_path: PathBuf,
}

impl PassLock {
    /// Acquire the exclusive pass lock.
    /// Returns an error if another pruning pass already holds it.
    pub fn acquire() -> Result<Self> {
        Self::acquire_at(&Self::lock_path())
    }

    fn acquire_at(lock_path: &Path) -> Result<Self> {
        debug!("Attempting to acquire lock: {:?}", lock_path);

        if let Some(parent) = lock_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create lock directory")?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(lock_path)
            .with_context(|| format!("Failed to open lock file: {:?}", lock_path))?;

        let mut boxed_lock = Box::new((RwLock::new(file), None));

        // SAFETY: We're creating a self-referential structure here.
        // The lock guard references the RwLock, which is stored in the same Box.
        // This is safe because:
        // 1. The Box won't move once created
        // 2. The guard and RwLock will be dropped together
        // 3. The guard is dropped before the RwLock in the tuple drop order
        let lock_ptr = &mut boxed_lock.0 as *mut RwLock<File>;
        let guard = unsafe { (*lock_ptr).try_write() }
            .context("Another pruning pass is already running (lock held)")?;

        let static_guard: fd_lock::RwLockWriteGuard<'static, File> =
            unsafe { std::mem::transmute(guard) };
        boxed_lock.1 = Some(static_guard);

        info!("Acquired pruning pass lock");

        Ok(Self {
            _lock: boxed_lock,
            lock_path: lock_path.to_path_buf(),
        })
    }

    /// Lock file location shared by every invocation of the binary
    fn lock_path() -> PathBuf {
        std::env::temp_dir().join("backup-pruner.lock")
    }

    /// Get the lock file path (for cleanup or inspection)
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for PassLock {
    fn drop(&mut self) {
        info!("Released pruning pass lock: {:?}", self.lock_path);

        // Try to remove the lock file (best effort)
        if let Err(e) = std::fs::remove_file(&self.lock_path) {
            debug!("Failed to remove lock file: {}", e);
        }
    }
}
