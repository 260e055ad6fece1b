use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::scenario::Id;

/// Edge payload: which path the section belongs to, its sequence number,
/// and the open set of auxiliary section attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionEdge {
    pub path_id: Id,
    pub sequence_number: i64,

    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// Directed graph of one route. Nodes are string identifiers interned
/// through an index map, so sections of different paths that resolve to
/// the same id end up on the same node; edges between the same pair of
/// nodes stay parallel and distinct.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    route_id: Id,
    name: String,
    graph: DiGraph<String, SectionEdge>,
    index: HashMap<String, NodeIndex>,
}

impl RouteGraph {
    pub fn new(route_id: Id) -> RouteGraph {
        let name = format!("Route-Graph for route {}", route_id);
        RouteGraph {
            route_id,
            name,
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    pub fn route_id(&self) -> &Id {
        &self.route_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a node, or returns the existing one with the same id.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        let RouteGraph { graph, index, .. } = self;
        *index
            .entry(id.to_string())
            .or_insert_with(|| graph.add_node(id.to_string()))
    }

    pub fn add_edge(&mut self, from: &str, to: &str, edge: SectionEdge) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.graph.add_edge(from, to, edge);
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(|id| id.as_str())
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &SectionEdge)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                edge.weight(),
            )
        })
    }

    pub(crate) fn edge_weights_mut(&mut self) -> impl Iterator<Item = &mut SectionEdge> + '_ {
        self.graph.edge_weights_mut()
    }
}
