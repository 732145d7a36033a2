//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of exactly `size` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'x'; size]).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create `link` pointing at `target`, both relative to the tree root.
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        symlink(self.dir.path().join(target), &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Set the permission bits of an entry.
    pub fn set_mode(&self, path: &str, mode: u32) {
        fs::set_permissions(self.dir.path().join(path), fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
