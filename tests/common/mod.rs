//! Shared testing utilities for strategist CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

pub const SCENARIO_PROFILE: &str = r#"birthday = "1990-01-01"
gender = "FEMALE"
occupation = "engineer"
interests = "hiking"
income = "1M"
history = "none"
quotes = "insurance is a scam"
target_product = ""
"#;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `strategist` binary with no credential set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("strategist").expect("Failed to locate strategist binary");
        cmd.current_dir(self.work_dir())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("STRATEGIST_LOG");
        cmd
    }

    /// Write a file relative to the working directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let child = self.root.child(name);
        child.write_str(content).expect("Failed to write test file");
        child.path().to_path_buf()
    }

    /// Write the standard scenario profile as `profile.toml`.
    pub fn write_scenario_profile(&self) -> PathBuf {
        self.write_file("profile.toml", SCENARIO_PROFILE)
    }

    /// Write `strategist.toml` pointing the API at `base_url`.
    pub fn write_config(&self, base_url: &str, locale: &str) -> PathBuf {
        self.write_file(
            "strategist.toml",
            &format!(
                "locale = \"{}\"\n\n[generation]\nmodel = \"test-model\"\n\n[api]\nbase_url = \"{}\"\ntimeout_secs = 5\n",
                locale, base_url
            ),
        )
    }
}
