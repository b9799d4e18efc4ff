#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn wt() -> Command {
    cargo_bin_cmd!("worktrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema for a test database
pub fn init_test_db(db_path: &str) {
    wt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
