use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::MissingSectionAttributes;
use crate::graph::RouteGraph;
use crate::scenario::{Id, Scenario};

/// Per-section attributes from a richer description of the same routes,
/// keyed by owning path and sequence number. Built once, then read-only.
#[derive(Debug, Clone, Default)]
pub struct SectionAttributeTable {
    entries: HashMap<(Id, i64), Map<String, Value>>,
}

impl SectionAttributeTable {
    pub fn new() -> SectionAttributeTable {
        SectionAttributeTable::default()
    }

    /// Collects every section of a scenario into the table.
    pub fn from_scenario(scenario: &Scenario) -> SectionAttributeTable {
        let mut table = SectionAttributeTable::new();
        for route in scenario.routes.iter() {
            for path in route.route_paths.iter() {
                for section in path.route_sections.iter() {
                    table.insert(path.id.clone(), section.sequence_number, section.attrs.clone());
                }
            }
        }
        table
    }

    pub fn insert(&mut self, path: Id, sequence_number: i64, attrs: Map<String, Value>) {
        self.entries.insert((path, sequence_number), attrs);
    }

    pub fn get(&self, path: &Id, sequence_number: i64) -> Option<&Map<String, Value>> {
        self.entries.get(&(path.clone(), sequence_number))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merges the table attributes into every edge of the graph. The table
/// describes the richer source, so on a key collision its value wins. A
/// section without a table entry means the two sources disagree about
/// which sections exist, which is fatal.
pub fn enrich_route_graph(
    graph: &mut RouteGraph,
    table: &SectionAttributeTable,
) -> Result<(), MissingSectionAttributes> {
    for edge in graph.edge_weights_mut() {
        let attrs = table.get(&edge.path_id, edge.sequence_number).ok_or_else(|| {
            MissingSectionAttributes {
                path: edge.path_id.clone(),
                sequence_number: edge.sequence_number,
            }
        })?;
        for (key, value) in attrs.iter() {
            edge.attrs.insert(key.clone(), value.clone());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SectionEdge;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn graph_with_one_edge(path: &str, sequence_number: i64, edge_attrs: Value) -> RouteGraph {
        let mut graph = RouteGraph::new(Id::from("r"));
        graph.add_edge(
            "(a)",
            "(b)",
            SectionEdge {
                path_id: Id::from(path),
                sequence_number,
                attrs: attrs(edge_attrs),
            },
        );
        graph
    }

    #[test]
    fn enrichment_adds_and_overwrites_attributes() {
        let mut graph = graph_with_one_edge("p1", 1, json!({"penalty": 0, "kept": true}));

        let mut table = SectionAttributeTable::new();
        table.insert(Id::from("p1"), 1, attrs(json!({"penalty": 4, "minimum_running_time": "PT30S"})));

        enrich_route_graph(&mut graph, &table).unwrap();

        let (_, _, edge) = graph.edges().next().unwrap();
        // The table value wins the collision on `penalty`.
        assert_eq!(edge.attrs.get("penalty"), Some(&json!(4)));
        assert_eq!(edge.attrs.get("minimum_running_time"), Some(&json!("PT30S")));
        assert_eq!(edge.attrs.get("kept"), Some(&json!(true)));
    }

    #[test]
    fn missing_table_entry_is_fatal_and_names_the_key() {
        let mut graph = graph_with_one_edge("p1", 7, json!({}));

        let mut table = SectionAttributeTable::new();
        table.insert(Id::from("p1"), 1, Map::new());

        let err = enrich_route_graph(&mut graph, &table).unwrap_err();
        assert_eq!(
            err,
            MissingSectionAttributes {
                path: Id::from("p1"),
                sequence_number: 7,
            }
        );
        assert_eq!(
            err.to_string(),
            "no section attributes for path p1 sequence number 7"
        );
    }

    #[test]
    fn table_from_scenario_holds_every_section() {
        let raw: crate::raw_scenario::Scenario = serde_json::from_value(json!({
            "routes": [{"id": 1, "route_paths": [
                {"id": "1#1", "route_sections": [
                    {"sequence_number": 1, "penalty": 2},
                    {"sequence_number": 2},
                ]},
                {"id": "1#2", "route_sections": [
                    {"sequence_number": 5, "penalty": 9},
                ]},
            ]}]
        }))
        .unwrap();
        let scenario = crate::scenario::convert_raw(&raw).unwrap();

        let table = SectionAttributeTable::from_scenario(&scenario);

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get(&Id::from("1#1"), 1).unwrap().get("penalty"),
            Some(&json!(2))
        );
        assert!(table.get(&Id::from("1#1"), 2).unwrap().is_empty());
        assert!(table.get(&Id::from("1#2"), 1).is_none());
    }
}
