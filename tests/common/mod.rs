use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the `labelsim` binary against an isolated config directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_home: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_home = temp_dir.path().join("config");
        fs::create_dir_all(&config_home).expect("Failed to create config dir");

        TestContext {
            temp_dir,
            config_home,
        }
    }

    /// Path the binary reads its default config from
    pub fn default_config_path(&self) -> PathBuf {
        self.config_home.join("label-similarity").join("config.json")
    }

    pub fn write_config(&self, json: &str) -> PathBuf {
        let path = self.temp_dir.path().join("custom.json");
        fs::write(&path, json).expect("Failed to write config");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_labelsim"))
            .args(args)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run labelsim")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
