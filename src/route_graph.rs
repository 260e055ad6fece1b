use std::collections::HashMap;
use std::time::Instant;

use log::*;
use rayon::prelude::*;

use crate::graph::{RouteGraph, SectionEdge};
use crate::node_id::{entry_node_id, exit_node_id};
use crate::scenario::{Id, Route, Scenario};

/// Builds the directed graph of one route. Every section contributes
/// exactly one edge; shared node ids are what make alternative paths
/// diverge from and reconverge into each other.
pub fn build_route_graph(route: &Route) -> RouteGraph {
    let mut graph = RouteGraph::new(route.id.clone());

    for path in route.route_paths.iter() {
        for (index, section) in path.route_sections.iter().enumerate() {
            let entry = entry_node_id(path, section, index);
            let exit = exit_node_id(path, section, index);
            trace!(
                "Adding edge from {} to {} with sequence number {}",
                entry,
                exit,
                section.sequence_number
            );
            graph.add_edge(
                &entry,
                &exit,
                SectionEdge {
                    path_id: path.id.clone(),
                    sequence_number: section.sequence_number,
                    attrs: section.attrs.clone(),
                },
            );
        }
    }

    graph
}

/// The built graphs of a scenario, one per route.
#[derive(Debug, Clone)]
pub struct RouteGraphs {
    graphs: HashMap<Id, RouteGraph>,
}

impl RouteGraphs {
    pub fn get(&self, route: &Id) -> Option<&RouteGraph> {
        self.graphs.get(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &RouteGraph)> + '_ {
        self.graphs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Id, &mut RouteGraph)> + '_ {
        self.graphs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

/// Builds every route graph of a scenario. Routes are independent, so
/// each graph is built in its own task and written into exactly one slot
/// of the registry.
pub fn generate_route_graphs(scenario: &Scenario) -> RouteGraphs {
    let start = Instant::now();

    let graphs = scenario
        .routes
        .par_iter()
        .map(|route| (route.id.clone(), build_route_graph(route)))
        .collect::<HashMap<_, _>>();

    info!(
        "Finished building {} route graphs in {:.3} seconds",
        graphs.len(),
        start.elapsed().as_secs_f64()
    );

    RouteGraphs { graphs }
}
