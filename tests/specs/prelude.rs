//! Shared helpers for CLI specs
//!
//! ```ignore
//! let temp = Project::empty();
//! temp.file("s.toml", SCENARIO);
//! temp.jm().args(&["run", "s.toml"]).passes().stdout_has("released");
//! ```

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// `jm` with a clean logging environment
pub fn jm() -> Cli {
    let mut cmd = Command::cargo_bin("jm").unwrap();
    cmd.env_remove("RUST_LOG");
    Cli { cmd }
}

/// Scratch directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file relative to the project root, creating parent dirs
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// `jm` running inside this project
    pub fn jm(&self) -> Cli {
        let mut cli = jm();
        cli.cmd.current_dir(self.dir.path());
        cli
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails(mut self) -> Outcome {
        Outcome {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Outcome {
    assert: Assert,
}

impl Outcome {
    pub fn stdout_has(self, expected: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicate::str::contains(expected)),
        }
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicate::str::contains(unexpected).not()),
        }
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        Self {
            assert: self.assert.stderr(predicate::str::contains(expected)),
        }
    }

    pub fn stderr_is_empty(self) -> Self {
        Self {
            assert: self.assert.stderr(predicate::str::is_empty()),
        }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }
}

pub const DESCENDING_SCENARIO: &str = r#"
name = "from-file"
description = "Highest ids first"
settle_timeout = "5s"

[[step]]
login = { server_type = "ComputeServer", ids = [1, 3, 5] }

[[step]]
submit = { name = "job01", requires = { ComputeServer = 2 } }
"#;
