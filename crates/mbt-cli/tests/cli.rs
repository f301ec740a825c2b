use mbt_cli::{build_cli, run};
use pretty_assertions::assert_eq;
use std::path::Path;

const COFFEE: &str = r#"{
  "nodes": [
    {"id": "n0", "label": "Machine Off"},
    {"id": "n1", "label": "Machine Idle"},
    {"id": "n2", "label": "Coin Inserted"},
    {"id": "n3", "label": "Coffee Served"}
  ],
  "edges": [
    {"source": "n0", "target": "n1", "label": "Switch On"},
    {"source": "n1", "target": "n0", "label": "Switch Off"},
    {"source": "n1", "target": "n2", "label": "Insert Coin"},
    {"source": "n2", "target": "n1", "label": "Return Coin"},
    {"source": "n2", "target": "n3", "label": "Press Coffee"}
  ]
}"#;

fn invoke(args: &[&str]) -> anyhow::Result<String> {
    let matches = build_cli().try_get_matches_from(args)?;
    let mut out = Vec::new();
    run(&matches, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn write_graph(dir: &Path) -> String {
    let path = dir.join("coffee.json");
    std::fs::write(&path, COFFEE).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn generate_writes_suite_report() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    let report = dir.path().join("out");

    let stdout = invoke(&[
        "mbt", "generate", "--graph", &graph, "--strategy", "full", "--testsuite", "Coffee",
        "--libraries", "States", "Actions", "--report", &report.to_string_lossy(),
    ])
    .unwrap();
    assert!(stdout.starts_with("3 test cases written to"));

    let text = std::fs::read_to_string(report.join("Coffee.json")).unwrap();
    let suite: mbt_suite::TestSuite = serde_json::from_str(&text).unwrap();
    assert_eq!(suite.imports, vec!["States".to_string(), "Actions".to_string()]);
    let names: Vec<&str> = suite.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Machine Off->Switch On->Machine Idle->Switch Off->Machine Off",
            concat!(
                "Machine Off->Switch On->Machine Idle->Insert Coin->Coin Inserted",
                "->Return Coin->Machine Idle"
            ),
            concat!(
                "Machine Off->Switch On->Machine Idle->Insert Coin->Coin Inserted",
                "->Press Coffee->Coffee Served"
            ),
        ]
    );
}

#[test]
fn unknown_strategy_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    let report = dir.path().join("out");

    let err = invoke(&[
        "mbt", "generate", "-g", &graph, "-s", "greedy", "-t", "Coffee", "-r",
        &report.to_string_lossy(),
    ])
    .unwrap_err();
    assert!(format!("{err:#}").contains("Selected strategy is not available!"));
    assert!(!report.exists());
}

#[test]
fn inspect_prints_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let stdout = invoke(&["mbt", "inspect", "-g", &graph]).unwrap();
    assert!(stdout.contains("Nodes: 4"));
    assert!(stdout.contains("Loop: n0 <-> n1"));
    assert!(stdout.contains("  n0 -> n1 -> n2 -> n3"));
}

#[test]
fn inspect_json_honors_coverage() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let stdout = invoke(&["mbt", "inspect", "-g", &graph, "-s", "random", "-c", "50", "--json"])
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["strategy"], "random");
    assert_eq!(report["edges"], 5);
    assert!(report["covered_nodes"].as_u64().unwrap() >= 2);
}

#[test]
fn config_file_sets_path_budget() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    let config = dir.path().join("mbt.toml");
    std::fs::write(&config, "[generator]\nmax_paths = 1\n").unwrap();

    let err = invoke(&["mbt", "inspect", "-g", &graph, "--config", &config.to_string_lossy()])
        .unwrap_err();
    assert!(format!("{err:#}").contains("path"));
}
