//! Test harness for hydrate integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl RunOutput {
    /// Lines of stdout that report an opened file.
    pub fn downloaded(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with("Downloading file: "))
            .collect()
    }
}

pub fn run_hydrate(args: &[&str]) -> RunOutput {
    let binary = env!("CARGO_BIN_EXE_hydrate");
    let output = Command::new(binary)
        .args(args)
        .env_remove("HYDRATE_LOG")
        .output()
        .expect("Failed to run hydrate");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code(),
    }
}

/// Run hydrate on `tree`'s root with extra arguments appended.
pub fn run_on(tree: &TestTree, extra: &[&str]) -> RunOutput {
    let root = tree.path().to_string_lossy().to_string();
    let mut args = vec![root.as_str()];
    args.extend_from_slice(extra);
    run_hydrate(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "data");
        assert!(file_path.exists());
    }
}
