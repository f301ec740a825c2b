//! GraphML documents
//!
//! Diagram editors export state machines as GraphML. Attributes are declared
//! once with `<key id=".." attr.name=".."/>` and attached with
//! `<data key="..">`; `label` names states and transitions, `x`/`y` become the
//! node position. Only the first `<graph>` element is read.

use crate::decode::{read_source, EdgeRecord, GraphDecoder, GraphDocument, NodeRecord};
use crate::error::DecodeError;
use crate::graph::Graph;
use roxmltree::{Document, Node as XmlNode};
use std::collections::HashMap;
use std::path::Path;

/// GraphML graph documents
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphmlDecoder;

impl GraphmlDecoder {
    /// Decode a GraphML document held in memory
    ///
    /// # Errors
    /// Malformed XML, a missing `<graph>` element, nodes without `id` and
    /// edges without `source`/`target` are [`DecodeError::Syntax`];
    /// structural failures are [`DecodeError::Structure`].
    pub fn decode_str(&self, text: &str, origin: &Path) -> Result<Graph, DecodeError> {
        let xml = Document::parse(text)
            .map_err(|e| DecodeError::syntax_error(origin, e.to_string()))?;
        Ok(to_document(&xml, origin)?.into_graph()?)
    }
}

impl GraphDecoder for GraphmlDecoder {
    fn decode(&self, source: &Path) -> Result<Graph, DecodeError> {
        let text = read_source(source)?;
        self.decode_str(&text, source)
    }

    fn name(&self) -> &'static str {
        "graphml"
    }
}

fn is(element: &XmlNode<'_, '_>, name: &str) -> bool {
    element.is_element() && element.tag_name().name() == name
}

fn to_document(xml: &Document<'_>, origin: &Path) -> Result<GraphDocument, DecodeError> {
    let root = xml.root_element();
    let keys: HashMap<&str, &str> = root
        .children()
        .filter(|n| is(n, "key"))
        .filter_map(|key| Some((key.attribute("id")?, key.attribute("attr.name")?)))
        .collect();
    let graph = root
        .descendants()
        .find(|n| is(n, "graph"))
        .ok_or_else(|| DecodeError::syntax_error(origin, "no <graph> element"))?;

    let mut doc = GraphDocument::default();
    for element in graph.children() {
        if is(&element, "node") {
            doc.nodes.push(node_record(&element, &keys, origin)?);
        } else if is(&element, "edge") {
            doc.edges.push(edge_record(&element, &keys, origin)?);
        }
    }
    tracing::debug!(
        "GraphML document has {} nodes and {} edges",
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok(doc)
}

/// `attr.name -> text` for every `<data>` child
fn attributes(element: &XmlNode<'_, '_>, keys: &HashMap<&str, &str>) -> HashMap<String, String> {
    element
        .children()
        .filter(|n| is(n, "data"))
        .filter_map(|data| {
            let key = data.attribute("key")?;
            let name = keys.get(key).copied().unwrap_or(key);
            // yEd nests the label text inside its own shape elements
            let text: String = data
                .descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect();
            Some((name.to_string(), text.trim().to_string()))
        })
        .collect()
}

fn required<'a>(
    element: &XmlNode<'a, '_>,
    name: &str,
    origin: &Path,
) -> Result<&'a str, DecodeError> {
    element.attribute(name).ok_or_else(|| {
        DecodeError::syntax_error(
            origin,
            format!("<{}> without '{}' attribute", element.tag_name().name(), name),
        )
    })
}

fn node_record(
    element: &XmlNode<'_, '_>,
    keys: &HashMap<&str, &str>,
    origin: &Path,
) -> Result<NodeRecord, DecodeError> {
    let id = required(element, "id", origin)?;
    let mut attrs = attributes(element, keys);

    let mut position = serde_json::Map::new();
    for axis in ["x", "y"] {
        if let Some(value) = attrs.remove(axis) {
            position.insert(axis.to_string(), coordinate(value));
        }
    }

    Ok(NodeRecord {
        id: id.to_string(),
        label: attrs.remove("label").filter(|l| !l.is_empty()),
        position: if position.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::Object(position)
        },
    })
}

fn edge_record(
    element: &XmlNode<'_, '_>,
    keys: &HashMap<&str, &str>,
    origin: &Path,
) -> Result<EdgeRecord, DecodeError> {
    let source = required(element, "source", origin)?;
    let target = required(element, "target", origin)?;
    let mut attrs = attributes(element, keys);

    Ok(EdgeRecord {
        id: element
            .attribute("id")
            .map(str::to_string)
            .or_else(|| attrs.remove("id")),
        source: source.to_string(),
        target: target.to_string(),
        label: attrs.remove("label").unwrap_or_default(),
    })
}

fn coordinate(value: String) -> serde_json::Value {
    value
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or(serde_json::Value::String(value), serde_json::Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    const VENDING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="label" attr.type="string"/>
  <key id="d1" for="node" attr.name="x" attr.type="double"/>
  <key id="d2" for="node" attr.name="y" attr.type="double"/>
  <key id="d3" for="edge" attr.name="label" attr.type="string"/>
  <graph id="G" edgedefault="directed">
    <node id="n0">
      <data key="d0">Start</data>
      <data key="d1">603.1</data>
      <data key="d2">122.0</data>
    </node>
    <node id="n1"><data key="d0">idle</data></node>
    <node id="n7"><data key="d0">off</data></node>
    <edge id="e1" source="n0" target="n1"><data key="d3">turn_on</data></edge>
    <edge id="e7" source="n1" target="n7"><data key="d3">turn_off</data></edge>
    <edge source="n7" target="n1"><data key="d3">turn_on</data></edge>
  </graph>
</graphml>"#;

    fn inline() -> PathBuf {
        PathBuf::from("<inline>")
    }

    #[test]
    fn reads_keyed_labels_and_positions() {
        let graph = GraphmlDecoder.decode_str(VENDING, &inline()).unwrap();

        assert_eq!(graph.node_count(), 3);
        let start = graph.start_node().unwrap();
        assert_eq!(start.label, "Start");
        assert_eq!(start.position["x"], 603.1);
        assert_eq!(graph.node(&"n1".into()).unwrap().position, serde_json::Value::Null);

        let labels: Vec<(&str, &str)> = graph
            .edges()
            .iter()
            .map(|e| (e.id.as_str(), e.label.as_str()))
            .collect();
        assert_eq!(labels, vec![("e1", "turn_on"), ("e7", "turn_off"), ("e2", "turn_on")]);
        assert_eq!(graph.cyclic_pairs().len(), 2);
    }

    #[test]
    fn nested_label_text_is_collected() {
        let text = r#"<graphml xmlns:y="http://www.yworks.com/xml/graphml">
  <key id="d6" for="node" yfiles.type="nodegraphics"/>
  <graph edgedefault="directed">
    <node id="n0">
      <data key="d6">
        <y:ShapeNode><y:NodeLabel> Machine Off </y:NodeLabel></y:ShapeNode>
      </data>
    </node>
  </graph>
</graphml>"#;
        let graph = GraphmlDecoder.decode_str(text, &inline()).unwrap();
        // without attr.name the data is keyed "d6", so the label falls back to the id
        assert_eq!(graph.start_node().unwrap().label, "n0");

        let labelled = text.replace("yfiles.type=\"nodegraphics\"", "attr.name=\"label\"");
        let graph = GraphmlDecoder.decode_str(&labelled, &inline()).unwrap();
        assert_eq!(graph.start_node().unwrap().label, "Machine Off");
    }

    #[test]
    fn edge_without_target_is_syntax_error() {
        let text = r#"<graphml><graph><node id="n0"/><edge source="n0"/></graph></graphml>"#;
        let err = GraphmlDecoder.decode_str(text, &inline()).unwrap_err();
        match err {
            DecodeError::Syntax { message, .. } => assert!(message.contains("'target'")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_xml_and_missing_graph() {
        assert!(matches!(
            GraphmlDecoder.decode_str("<graphml><graph>", &inline()),
            Err(DecodeError::Syntax { .. })
        ));
        assert!(matches!(
            GraphmlDecoder.decode_str("<graphml/>", &inline()),
            Err(DecodeError::Syntax { .. })
        ));
    }

    #[test]
    fn dangling_edge_is_structural() {
        let text = r#"<graphml><graph>
            <node id="n0"/>
            <edge source="n0" target="n9"/>
        </graph></graphml>"#;
        let err = GraphmlDecoder.decode_str(text, &inline()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Structure(GraphError::UnknownEndpoint { .. })
        ));
    }
}
