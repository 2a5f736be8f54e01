//! CLI integration tests using the REAL dreamz binary

mod common;

use common::{TestWorkspace, dreamz_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    dreamz_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("groups videos from a catalog into bundles"))
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("tiers"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn test_short_help_output() {
    dreamz_cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tiered video bundle composer"));
}

#[test]
fn test_version_output() {
    dreamz_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dreamz"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    dreamz_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dreamz"));
}

#[test]
fn test_completions_unknown_shell() {
    dreamz_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_init_creates_workspace_files() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized .dreamz"))
        .stdout(predicate::str::contains("10 videos, 6 channels"));

    assert!(workspace.file_exists(".dreamz/dreamz.yaml"));
    assert!(workspace.file_exists(".dreamz/state.yaml"));

    let config = workspace.read_file(".dreamz/dreamz.yaml");
    assert!(config.contains("max_videos: 10"));
    assert!(config.contains("premium-2"));
}

#[test]
fn test_init_refuses_existing_workspace() {
    let workspace = TestWorkspace::initialized();

    workspace
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace already exists"));
}

#[test]
fn test_init_force_resets_state() {
    let workspace = TestWorkspace::initialized();
    workspace.cmd().args(["select", "1"]).assert().success();
    workspace.cmd().args(["create", "Part 1"]).assert().success();

    workspace.cmd().args(["init", "--force"]).assert().success();

    workspace
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bundles created."));
}

#[test]
fn test_init_empty_catalog() {
    let workspace = TestWorkspace::new();
    workspace.cmd().args(["init", "--empty"]).assert().success();

    workspace
        .cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("No videos in catalog."));
}

#[test]
fn test_command_outside_workspace_fails() {
    let workspace = TestWorkspace::new();

    workspace
        .cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace not found"));
}

#[test]
fn test_workspace_flag() {
    let workspace = TestWorkspace::initialized();
    let elsewhere = TestWorkspace::new();

    elsewhere
        .cmd()
        .args(["status", "-w"])
        .arg(&workspace.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: Upload & Bundle"));
}

#[test]
fn test_workspace_env_var() {
    let workspace = TestWorkspace::initialized();
    let elsewhere = TestWorkspace::new();

    elsewhere
        .cmd()
        .env("DREAMZ_WORKSPACE", &workspace.path)
        .arg("channel-list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target channels (6)"));
}

#[test]
fn test_workspace_found_from_subdirectory() {
    let workspace = TestWorkspace::initialized();
    let nested = workspace.path.join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    dreamz_cmd()
        .current_dir(&nested)
        .args(["catalog", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clip_01.mp4"));
}

#[test]
fn test_catalog_json() {
    let workspace = TestWorkspace::initialized();
    let stdout = workspace.stdout(&["catalog", "--json"]);

    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[0]["size"], 45_000_000);
    assert_eq!(items[0]["selected"], false);
}

#[test]
fn test_corrupt_config_reports_path() {
    let workspace = TestWorkspace::initialized();
    workspace.write_file(".dreamz/dreamz.yaml", b"limits: [1, 2]\n");

    workspace
        .cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dreamz.yaml"));
}

#[test]
fn test_invalid_config_rejected() {
    let workspace = TestWorkspace::initialized();
    workspace.write_file(".dreamz/dreamz.yaml", b"limits:\n  max_videos: 0\n");

    workspace
        .cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let workspace = TestWorkspace::initialized();

    let output = workspace
        .cmd()
        .args(["-v", "catalog", "--json"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("opened workspace"));
}
