#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ntl() -> Command {
    cargo_bin_cmd!("nutrilog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_nutrilog.sqlite", name));

    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a plan file into tempdir and return its absolute path
pub fn write_plan_file(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_plan.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("write plan file");
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    ntl()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    // add a couple of meals via CLI (tracked and untracked)
    ntl()
        .args([
            "--db",
            db_path,
            "--user",
            "alice",
            "add",
            "Oatmeal",
            "--calories",
            "150",
            "--protein",
            "5",
            "--carbs",
            "27",
            "--fat",
            "3",
            "--at",
            "08:00",
            "--tracked",
        ])
        .assert()
        .success();

    ntl()
        .args([
            "--db",
            db_path,
            "--user",
            "alice",
            "add",
            "Chicken bowl",
            "--calories",
            "520",
            "--protein",
            "42",
            "--carbs",
            "55",
            "--fat",
            "14",
            "--at",
            "12:30",
        ])
        .assert()
        .success();
}
