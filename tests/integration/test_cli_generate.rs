use assert_cmd::Command;
use predicates::str::{contains, starts_with};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BIN: &str = "segflow";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("base_workflow.json")
}

fn segflow_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN).expect("binary should build");
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env_remove("SEGFLOW_LOG_LEVEL")
        .env_remove("SEGFLOW_LOG_FILE")
        .env_remove("SEGFLOW_LOG_DIR");
    cmd
}

fn find_node(document: &Value, node_id: i64) -> &Value {
    document["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|node| node["id"] == json!(node_id))
        .unwrap()
}

#[test]
fn version_flag_prints_crate_version() {
    let temp_dir = TempDir::new().unwrap();
    segflow_cmd(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(starts_with(format!("{BIN} {}", segflow::VERSION)));
}

#[test]
fn help_groups_flags_under_headings() {
    let temp_dir = TempDir::new().unwrap();
    segflow_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Frames:"))
        .stdout(contains("Motion:"))
        .stdout(contains("Output Options:"))
        .stdout(contains("--start-image"));
}

#[test]
fn generates_full_quality_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("segment.json");

    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--end-image", "b.png"])
        .args(["--motion", "zoom", "--quality", "full"])
        .arg("--base-workflow")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Generated workflow:"))
        .stdout(contains("segment.json"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("{\n  \""));
    let document: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(find_node(&document, 142)["widgets_values"], json!(["a.png", "image"]));
    assert_eq!(find_node(&document, 683)["widgets_values"], json!(["b.png", "image"]));
    assert_eq!(find_node(&document, 53)["mode"], json!(2));
    assert_eq!(find_node(&document, 205)["mode"], json!(0));
    assert_eq!(
        find_node(&document, 205)["widgets_values"]["filename_prefix"],
        json!("%date:yyyy-MM-dd%/full/zoom_full/AD")
    );
    assert_eq!(
        find_node(&document, 568)["widgets_values"]["video"],
        json!("motions/zoom.mp4")
    );
}

#[test]
fn quality_defaults_to_sample_and_override_video_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out").join("segment.json");

    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--end-image", "b.png"])
        .args(["--motion", "rotate_left", "--motion-video", "custom/left.mp4"])
        .arg("--base-workflow")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(find_node(&document, 53)["mode"], json!(0));
    assert_eq!(find_node(&document, 205)["mode"], json!(2));
    assert_eq!(
        find_node(&document, 53)["widgets_values"]["filename_prefix"],
        json!("%date:yyyy-MM-dd%/sample/rotate_left_sample/AD")
    );
    assert_eq!(
        find_node(&document, 568)["widgets_values"]["video"],
        json!("custom/left.mp4")
    );
}

#[test]
fn unknown_motion_is_rejected_by_parser() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("segment.json");

    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--end-image", "b.png"])
        .args(["--motion", "spin", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("spin"));

    assert!(!output.exists());
}

#[test]
fn unknown_quality_is_rejected_by_parser() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("segment.json");

    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--end-image", "b.png"])
        .args(["--motion", "up", "--quality", "draft", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("draft"));

    assert!(!output.exists());
}

#[test]
fn missing_node_fails_without_writing_output() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base.json");
    let output = temp_dir.path().join("segment.json");

    let mut document: Value =
        serde_json::from_str(&fs::read_to_string(fixture_path()).unwrap()).unwrap();
    document["nodes"]
        .as_array_mut()
        .unwrap()
        .retain(|node| node["id"] != json!(219));
    fs::write(&base, serde_json::to_string(&document).unwrap()).unwrap();

    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--end-image", "b.png"])
        .args(["--motion", "down"])
        .arg("--base-workflow")
        .arg(&base)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("WorkflowError"))
        .stderr(contains("Node id 219 not found in workflow"));

    assert!(!output.exists());
}

#[test]
fn missing_default_base_workflow_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("segment.json");

    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--end-image", "b.png"])
        .args(["--motion", "zoom", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Base workflow not found: 4I2V Flow"));

    assert!(!output.exists());
}

#[test]
fn missing_required_flag_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    segflow_cmd(temp_dir.path())
        .args(["--start-image", "a.png", "--motion", "zoom", "--output", "x.json"])
        .assert()
        .failure()
        .stderr(contains("--end-image"));
}
