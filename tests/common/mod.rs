//! Common test infrastructure for scorejoin integration tests.
//!
//! Provides:
//! - TestProject: Temp directory holding input/output documents
//! - Helpers to run the compiled binary (CARGO_BIN_EXE_scorejoin)
//!   against it and assert on exit codes

use std::fs;
use std::process::{Command, Output};

/// A test project with an isolated directory for input and output
/// documents. The directory is removed on drop.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a project seeded with the standard fixture documents.
    pub fn with_fixtures() -> Self {
        let project = Self::empty();
        project.write_file("models.json", FIXTURE_BENCHMARKS);
        project.write_file("model-scores.json", FIXTURE_ROSTER);
        project
    }

    /// Write a file into the project directory.
    pub fn write_file(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, contents).expect("Failed to write test file");
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read test file")
    }

    pub fn read_json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(name)).expect("Failed to parse test file as JSON")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Run scorejoin with isolated environment
    pub fn run_scorejoin(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_scorejoin"))
            .args(args)
            .current_dir(self.dir.path())
            // Isolate environment
            .env_clear()
            .env("HOME", self.dir.path())
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .output()
            .expect("Failed to execute scorejoin")
    }

    /// Run scorejoin and assert success
    pub fn run_scorejoin_ok(&self, args: &[&str]) -> Output {
        let output = self.run_scorejoin(args);
        assert!(
            output.status.success(),
            "scorejoin {:?} failed (exit {:?}):\nstdout: {}\nstderr: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Run scorejoin and assert failure with specific exit code
    #[allow(dead_code)]
    pub fn run_scorejoin_fails(&self, args: &[&str], expected_code: i32) -> Output {
        let output = self.run_scorejoin(args);
        assert_eq!(
            output.status.code(),
            Some(expected_code),
            "scorejoin {:?} expected exit {} but got {:?}:\nstdout: {}\nstderr: {}",
            args,
            expected_code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }
}

/// Benchmark table used by most end-to-end tests: one reorder target,
/// one null score, one long name with no reorder tolerance.
pub const FIXTURE_BENCHMARKS: &str = r#"{
  "updated": "2025-06-30",
  "data": [
    {
      "name": "GPT 4 Omni",
      "vendor": "OpenAI",
      "evaluations": { "mmlu_pro": 88.7, "gsm8k": 95.2 }
    },
    {
      "name": "Claude Opus",
      "vendor": "Anthropic",
      "evaluations": { "mmlu_pro": null }
    },
    {
      "name": "Big Five Word Model Name",
      "evaluations": { "mmlu_pro": 61.0 }
    }
  ]
}"#;

/// Roster used by most end-to-end tests: one reordered match, one name
/// blocked by a null score, one empty name carrying stale keys.
pub const FIXTURE_ROSTER: &str = r#"[
  {
    "id": "gpt-4o",
    "short_name": "Omni GPT 4",
    "context_window": 128000,
    "pricing": { "input": 2.5, "output": 10.0 }
  },
  {
    "id": "claude-opus",
    "short_name": "claude opus"
  },
  {
    "id": "mystery",
    "short_name": "",
    "evaluations": {
      "mmlu_pro": 12.3,
      "mmlu_pro_source": "flexible_word_order_match",
      "hellaswag": 80.1
    }
  }
]"#;
