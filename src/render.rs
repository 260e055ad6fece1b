use std::fmt::Write;

use crate::graph::RouteGraph;

/// Renders a route graph as Graphviz dot. Nodes carry their own id as
/// label, edges are labeled with the owning path and sequence number.
pub fn dot_string(graph: &RouteGraph) -> String {
    let mut out = String::new();
    writeln!(out, "digraph \"{}\" {{", escape(graph.name())).unwrap();
    for node in graph.nodes() {
        writeln!(out, "    \"{}\" [label=\"{}\"];", escape(node), escape(node)).unwrap();
    }
    for (from, to, edge) in graph.edges() {
        writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{}#{}\"];",
            escape(from),
            escape(to),
            escape(edge.path_id.as_str()),
            edge.sequence_number
        )
        .unwrap();
    }
    out.push_str("}\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SectionEdge;
    use crate::scenario::Id;
    use serde_json::Map;

    #[test]
    fn renders_nodes_and_labeled_edges() {
        let mut graph = RouteGraph::new(Id::from("R1"));
        graph.add_edge(
            "(10_beginning)",
            "(10->20)",
            SectionEdge {
                path_id: Id::from("P1"),
                sequence_number: 10,
                attrs: Map::new(),
            },
        );

        let dot = dot_string(&graph);

        assert!(dot.starts_with("digraph \"Route-Graph for route R1\" {\n"));
        assert!(dot.contains("    \"(10_beginning)\" [label=\"(10_beginning)\"];\n"));
        assert!(dot.contains("    \"(10_beginning)\" -> \"(10->20)\" [label=\"P1#10\"];\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn quotes_in_identifiers_are_escaped() {
        let mut graph = RouteGraph::new(Id::from("r"));
        graph.add_node("(a\"b)");

        let dot = dot_string(&graph);
        assert!(dot.contains("\"(a\\\"b)\""));
    }
}
