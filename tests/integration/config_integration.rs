//! Workspace configuration driving a generation run

use super::test_utils::FlowTree;
use flow_manifest::cli::{Commands, RunContext};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_workspace_config_file_changes_paths() {
    let tree = FlowTree::without_root();
    let content = tree.workspace().join("content").join("guides").join("setup");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("install.txt"), "Install the tool").unwrap();
    fs::write(
        tree.workspace().join("flow-manifest.toml"),
        "root = \"content/guides\"\noutput = \"dist/manifest.json\"\n",
    )
    .unwrap();

    let ctx = RunContext::new(tree.workspace().to_path_buf(), None).unwrap();
    let out = ctx.execute(&Commands::Generate { dry_run: false }).unwrap();
    assert_eq!(
        out,
        "Successfully generated dist/manifest.json with 1 flow(s)."
    );

    let written = fs::read_to_string(tree.workspace().join("dist").join("manifest.json")).unwrap();
    assert!(written.contains("\"file\": \"content/guides/setup/install.txt\""));
}

#[test]
fn test_explicit_config_file_and_cli_overrides() {
    let tree = FlowTree::new();
    tree.file("flow", "about.md", "About")
        .file("flow", "tab.txt", "Ignored because extension is md");
    let config_path = tree.workspace().join("custom.toml");
    fs::write(
        &config_path,
        "description_file = \"about.md\"\ntab_extension = \"md\"\n",
    )
    .unwrap();

    let ctx = RunContext::new(tree.workspace().to_path_buf(), Some(config_path))
        .unwrap()
        .with_overrides(None, Some(PathBuf::from("out.json")));
    ctx.execute(&Commands::Generate { dry_run: false }).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tree.workspace().join("out.json")).unwrap())
            .unwrap();
    assert_eq!(written[0]["description"], "About");
    assert_eq!(written[0]["tabs"].as_array().unwrap().len(), 0);
}

#[test]
fn test_invalid_config_is_reported() {
    let tree = FlowTree::new();
    fs::write(
        tree.workspace().join("flow-manifest.toml"),
        "description_file = \"same.txt\"\ninstructions_file = \"same.txt\"\n",
    )
    .unwrap();

    let ctx = RunContext::new(tree.workspace().to_path_buf(), None).unwrap();
    let err = ctx
        .execute(&Commands::Generate { dry_run: false })
        .unwrap_err();
    assert!(err.to_string().contains("must differ"));
    assert!(!tree.manifest_path().exists());
}
