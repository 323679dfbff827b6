//! Runs the compiled binary end to end

use super::test_utils::FlowTree;
use std::process::Command;

fn flow_manifest(tree: &FlowTree) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_flow-manifest"));
    command
        .env_remove("FLOW_MANIFEST_LOG")
        .env_remove("FLOW_MANIFEST_LOG_OUTPUT")
        .env_remove("FLOW_MANIFEST_LOG_FORMAT")
        .arg("--workspace")
        .arg(tree.workspace());
    command
}

#[test]
fn test_binary_generates_manifest() {
    let tree = FlowTree::new();
    tree.file("greeting", "description.txt", "Says hello")
        .file("greeting", "hello.txt", "Hi there");

    let output = flow_manifest(&tree).output().unwrap();
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Successfully generated flows.json with 1 flow(s)."
    );
    assert!(tree.read_manifest().contains("\"tabName\": \"hello\""));
}

#[test]
fn test_binary_missing_root_exits_zero() {
    let tree = FlowTree::without_root();

    let output = flow_manifest(&tree).arg("--quiet").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: The directory 'flows' does not exist."));
    assert!(stdout.contains("Created an empty 'flows' directory for you."));
    assert!(tree.root().is_dir());
    assert!(!tree.manifest_path().exists());
}

#[test]
fn test_binary_warns_about_unreadable_tab() {
    let tree = FlowTree::new();
    tree.file("flow", "good.txt", "Fine");
    std::fs::write(tree.root().join("flow").join("bad.txt"), [0xff, 0xfe]).unwrap();

    let output = flow_manifest(&tree)
        .args(["--log-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not read file"));
    assert!(stderr.contains("bad.txt"));
}

#[test]
fn test_binary_dry_run_prints_manifest() {
    let tree = FlowTree::new();
    tree.file("flow", "tab.txt", "Tab");

    let output = flow_manifest(&tree)
        .args(["--quiet", "generate", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed[0]["tabs"][0]["tabName"], "tab");
    assert!(!tree.manifest_path().exists());
}

#[test]
fn test_binary_write_failure_is_fatal() {
    let tree = FlowTree::new();
    tree.file("flow", "tab.txt", "Tab");
    std::fs::create_dir(tree.manifest_path()).unwrap();

    let output = flow_manifest(&tree).arg("--quiet").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write manifest"));
}
