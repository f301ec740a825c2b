use mbt_graph::{DecodeError, EdgeRecord, FileDecoder, GraphDecoder, GraphDocument, NodeRecord};
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn node(id: &str, label: &str) -> NodeRecord {
    NodeRecord {
        id: id.into(),
        label: Some(label.into()),
        position: serde_json::Value::Null,
    }
}

fn edge(source: &str, target: &str, label: &str) -> EdgeRecord {
    EdgeRecord {
        id: None,
        source: source.into(),
        target: target.into(),
        label: label.into(),
    }
}

fn turnstile() -> GraphDocument {
    GraphDocument {
        start: None,
        nodes: vec![node("n0", "Locked"), node("n1", "Unlocked")],
        edges: vec![edge("n0", "n1", "coin"), edge("n1", "n0", "push")],
    }
}

#[test]
fn decodes_json_file_by_extension() {
    let file = write_temp(".json", &serde_json::to_string(&turnstile()).unwrap());
    let graph = FileDecoder.decode(file.path()).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.start_node().unwrap().label, "Locked");
    assert_eq!(graph.cyclic_pairs().len(), 2);
}

#[test]
fn json_and_yaml_decode_to_same_structure() {
    let doc = turnstile();
    let json = write_temp(".json", &serde_json::to_string(&doc).unwrap());
    let yaml = write_temp(".YML", &serde_yaml::to_string(&doc).unwrap());

    let a = FileDecoder.decode(json.path()).unwrap();
    let b = FileDecoder.decode(yaml.path()).unwrap();
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileDecoder.decode(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DecodeError::Io { .. }));
}

#[test]
fn graphml_export_matches_json_document() {
    let graphml = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="label" attr.type="string"/>
  <key id="d1" for="edge" attr.name="label" attr.type="string"/>
  <graph edgedefault="directed">
    <node id="n0"><data key="d0">Locked</data></node>
    <node id="n1"><data key="d0">Unlocked</data></node>
    <edge source="n0" target="n1"><data key="d1">coin</data></edge>
    <edge source="n1" target="n0"><data key="d1">push</data></edge>
  </graph>
</graphml>"#;
    let xml = write_temp(".graphml", graphml);
    let json = write_temp(".json", &serde_json::to_string(&turnstile()).unwrap());

    let a = FileDecoder.decode(xml.path()).unwrap();
    let b = FileDecoder.decode(json.path()).unwrap();
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());
}
