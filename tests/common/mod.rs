#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treediff::config::Config;

/// Two trees and a diffs directory laid out like a real working directory
pub struct TestTrees {
    pub temp_dir: TempDir,
}

impl TestTrees {
    /// Create `dirA`, `dirB` and `diffs` under a fresh temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        for sub in ["dirA", "dirB", "diffs"] {
            fs::create_dir(temp_dir.path().join(sub))?;
        }
        Ok(Self { temp_dir })
    }

    /// Working directory holding the trees
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dir_a(&self) -> PathBuf {
        self.path().join("dirA")
    }

    pub fn dir_b(&self) -> PathBuf {
        self.path().join("dirB")
    }

    pub fn diffs(&self) -> PathBuf {
        self.path().join("diffs")
    }

    /// Write a file into tree A, creating parent directories
    pub fn write_a(&self, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        write_file(&self.dir_a(), relative, content)
    }

    /// Write a file into tree B, creating parent directories
    pub fn write_b(&self, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        write_file(&self.dir_b(), relative, content)
    }

    /// Configuration pointing at this fixture's absolute paths
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.roots.dir_a = self.dir_a();
        config.roots.dir_b = self.dir_b();
        config.roots.diffs = self.diffs();
        config
    }

    /// Contents of a diff artifact, if it was written
    pub fn read_diff(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.diffs().join(format!("{relative}.diff"))).ok()
    }
}

fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
