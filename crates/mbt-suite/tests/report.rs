use mbt_suite::{ReportWriter, Step, SuiteBuilder, TestSuite};
use mbt_test_utils::{four_node_loop, seq};
use pretty_assertions::assert_eq;

#[test]
fn suite_round_trips_through_report_file() {
    let graph = four_node_loop();
    let sequences = vec![
        seq(&["n0", "n1", "n0"]),
        seq(&["n0", "n1", "n2"]),
        seq(&["n0", "n1", "n3"]),
    ];
    let imports = vec!["StatesLibrary".to_string(), "ActionsLibrary".to_string()];
    let suite = SuiteBuilder::new()
        .create_suite("Loop Model", &graph, &sequences, &imports)
        .unwrap();

    assert_eq!(suite.len(), 3);
    assert_eq!(suite.imports, imports);
    let case = suite.case("N0->n0_n1->N1->n1_n2->N2").unwrap();
    assert_eq!(case.steps.last(), Some(&Step::verify("N2")));

    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path().join("reports"));
    let path = writer.write(&suite).unwrap();
    assert_eq!(path, dir.path().join("reports").join("Loop_Model.json"));

    let read: TestSuite = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(read, suite);
}

#[test]
fn steps_serialize_with_kind_tag() {
    let json = serde_json::to_value(Step::stimulus("Insert Coin")).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "stimulus", "keyword": "Insert Coin"}));
}
