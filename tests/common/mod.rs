#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the tickethub binary against an isolated config and data directory
pub struct TicketHubTest {
    pub temp_dir: TempDir,
}

impl TicketHubTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketHubTest { temp_dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.config_path(), yaml).expect("Failed to write config");
    }

    /// Write raw contents into a storage slot
    pub fn write_slot(&self, key: &str, contents: &str) {
        fs::create_dir_all(self.data_dir()).expect("Failed to create data dir");
        fs::write(self.data_dir().join(format!("{key}.json")), contents)
            .expect("Failed to write slot");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_tickethub"))
            .args(args)
            .env("TICKETHUB_CONFIG", self.config_path())
            .env("TICKETHUB_DATA_DIR", self.data_dir())
            .env_remove("TICKETHUB_LOG")
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute tickethub command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
