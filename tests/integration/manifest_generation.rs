//! End-to-end generation over real directory trees

use super::test_utils::FlowTree;
use flow_manifest::config::ManifestConfig;
use flow_manifest::generate::{generate, GenerateOptions, GenerateOutcome};
use serde_json::{json, Value};

fn run(tree: &FlowTree) -> GenerateOutcome {
    generate(
        &ManifestConfig::default(),
        tree.workspace(),
        &GenerateOptions::default(),
    )
    .unwrap()
}

fn manifest_json(tree: &FlowTree) -> Value {
    serde_json::from_str(&tree.read_manifest()).unwrap()
}

#[test]
fn test_greeting_scenario() {
    let tree = FlowTree::new();
    tree.file("greeting", "description.txt", "Says hello")
        .file("greeting", "hello.txt", "Hi there\nand more below\n");

    let outcome = run(&tree);
    assert_eq!(
        outcome,
        GenerateOutcome::Written {
            output: "flows.json".to_string(),
            flows: 1
        }
    );

    assert_eq!(
        manifest_json(&tree),
        json!([{
            "name": "greeting",
            "description": "Says hello",
            "instructions": "",
            "tabs": [{
                "tabName": "hello",
                "file": "flows/greeting/hello.txt",
                "description": "Hi there"
            }]
        }])
    );
}

#[test]
fn test_empty_folder_is_excluded() {
    let tree = FlowTree::new();
    tree.folder("empty")
        .file("kept", "instructions.txt", "Follow along");

    run(&tree);
    let manifest = manifest_json(&tree);
    let names: Vec<_> = manifest
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["kept"]);
}

#[test]
fn test_non_txt_only_folder_is_excluded() {
    let tree = FlowTree::new();
    tree.file("images", "logo.png", "binary-ish")
        .file("images", "notes.md", "markdown");

    let outcome = run(&tree);
    assert_eq!(
        outcome,
        GenerateOutcome::Written {
            output: "flows.json".to_string(),
            flows: 0
        }
    );
    assert_eq!(tree.read_manifest(), "[]");
}

#[test]
fn test_ordering_of_flows_and_tabs() {
    let tree = FlowTree::new();
    for flow in ["onboarding", "billing", "checkout"] {
        for tab in ["step2.txt", "step10.txt", "intro.txt"] {
            tree.file(flow, tab, tab);
        }
    }

    run(&tree);
    let manifest = manifest_json(&tree);
    let flows = manifest.as_array().unwrap();
    let names: Vec<_> = flows.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["billing", "checkout", "onboarding"]);

    let tabs: Vec<_> = flows[0]["tabs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tabName"].as_str().unwrap())
        .collect();
    assert_eq!(tabs, vec!["intro", "step10", "step2"]);
}

#[test]
fn test_reserved_names_never_listed_as_tabs() {
    let tree = FlowTree::new();
    tree.file("flow", "description.txt", "Desc")
        .file("flow", "instructions.txt", "Instr")
        .file("flow", "details.TXT", "Details first line");

    run(&tree);
    let manifest = manifest_json(&tree);
    let tabs = manifest[0]["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0]["tabName"], "details");
    assert_eq!(tabs[0]["file"], "flows/flow/details.TXT");
}

#[test]
fn test_missing_description_defaults_to_empty() {
    let tree = FlowTree::new();
    tree.file("flow", "tab.txt", "Tab");

    run(&tree);
    let manifest = manifest_json(&tree);
    assert_eq!(manifest[0]["description"], "");
    assert_eq!(manifest[0]["instructions"], "");
}

#[test]
fn test_unreadable_description_is_tolerated() {
    let tree = FlowTree::new();
    tree.file("flow", "tab.txt", "Tab line");
    std::fs::write(tree.root().join("flow").join("description.txt"), [0xc3, 0x28]).unwrap();

    run(&tree);
    let manifest = manifest_json(&tree);
    assert_eq!(manifest[0]["description"], "");
    assert_eq!(manifest[0]["tabs"][0]["description"], "Tab line");
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let tree = FlowTree::new();
    tree.file("α-flow", "description.txt", "Ünïcödé description ✓")
        .file("α-flow", "tab.txt", "日本語の説明\nbody")
        .file("beta", "instructions.txt", "  Do things  ");

    run(&tree);
    let first = std::fs::read(tree.manifest_path()).unwrap();
    run(&tree);
    let second = std::fs::read(tree.manifest_path()).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("日本語の説明"));
    assert!(text.contains("\n    {\n        \"name\": \"beta\""));
}

#[test]
fn test_missing_root_scenario() {
    let tree = FlowTree::without_root();

    let outcome = run(&tree);
    assert!(matches!(outcome, GenerateOutcome::RootCreated { .. }));
    assert!(tree.root().is_dir());
    assert!(!tree.manifest_path().exists());
    assert!(outcome
        .summary()
        .unwrap()
        .contains("Created an empty 'flows' directory for you."));

    // the next run finds the created root and writes an empty manifest
    run(&tree);
    assert_eq!(tree.read_manifest(), "[]");
}
