use crate::scenario::{RoutePath, RouteSection};

/// Canonical id of the node a section is entered through. A junction
/// marker names the node outright and merges it with every other section
/// carrying the same marker; only the first marker of a list is
/// significant. Without a marker, the first section of a path gets a
/// beginning node and every other section an adjacency node shared with
/// its predecessor.
pub fn entry_node_id(path: &RoutePath, section: &RouteSection, index: usize) -> String {
    if let Some(marker) = section.markers_at_entry.first() {
        return format!("({})", marker);
    }
    if index == 0 {
        format!("({}_beginning)", section.sequence_number)
    } else {
        format!(
            "({}->{})",
            path.route_sections[index - 1].sequence_number,
            section.sequence_number
        )
    }
}

/// Canonical id of the node a section is left through. Symmetric to
/// [`entry_node_id`]: first exit marker, end node for the last section of
/// a path, adjacency node with the successor otherwise.
pub fn exit_node_id(path: &RoutePath, section: &RouteSection, index: usize) -> String {
    if let Some(marker) = section.markers_at_exit.first() {
        return format!("({})", marker);
    }
    if index == path.route_sections.len() - 1 {
        format!("({}_end)", section.sequence_number)
    } else {
        format!(
            "({}->{})",
            section.sequence_number,
            path.route_sections[index + 1].sequence_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Id;
    use serde_json::Map;

    fn section(sequence_number: i64) -> RouteSection {
        RouteSection {
            sequence_number,
            markers_at_entry: vec![],
            markers_at_exit: vec![],
            attrs: Map::new(),
        }
    }

    fn path(id: &str, route_sections: Vec<RouteSection>) -> RoutePath {
        RoutePath {
            id: Id::from(id),
            route_sections,
        }
    }

    #[test]
    fn boundary_sections_use_beginning_and_end_nodes() {
        let path = path("p", vec![section(10), section(20)]);

        assert_eq!(entry_node_id(&path, &path.route_sections[0], 0), "(10_beginning)");
        assert_eq!(exit_node_id(&path, &path.route_sections[1], 1), "(20_end)");
    }

    #[test]
    fn interior_sections_share_adjacency_nodes() {
        let path = path("p", vec![section(10), section(20), section(30)]);

        assert_eq!(exit_node_id(&path, &path.route_sections[0], 0), "(10->20)");
        assert_eq!(entry_node_id(&path, &path.route_sections[1], 1), "(10->20)");
        assert_eq!(exit_node_id(&path, &path.route_sections[1], 1), "(20->30)");
        assert_eq!(entry_node_id(&path, &path.route_sections[2], 2), "(20->30)");
    }

    #[test]
    fn first_marker_wins_over_position() {
        let mut first = section(10);
        first.markers_at_entry = vec![Id::from("AK1"), Id::from("AK2")];
        first.markers_at_exit = vec![Id::from("AK3")];
        let path = path("p", vec![first, section(20)]);

        assert_eq!(entry_node_id(&path, &path.route_sections[0], 0), "(AK1)");
        assert_eq!(exit_node_id(&path, &path.route_sections[0], 0), "(AK3)");
    }

    #[test]
    fn matching_markers_in_different_paths_resolve_to_the_same_node() {
        let mut last = section(2);
        last.markers_at_exit = vec![Id::from("AK5")];
        let p1 = path("p1", vec![section(1), last]);

        let mut first = section(3);
        first.markers_at_entry = vec![Id::from("AK5")];
        let p2 = path("p2", vec![first, section(4)]);

        assert_eq!(
            exit_node_id(&p1, &p1.route_sections[1], 1),
            entry_node_id(&p2, &p2.route_sections[0], 0)
        );
    }

    #[test]
    fn repeated_calls_return_identical_ids() {
        let mut marked = section(5);
        marked.markers_at_entry = vec![Id::from("C")];
        let path = path("p", vec![marked, section(6)]);

        for index in 0..path.route_sections.len() {
            let section = &path.route_sections[index];
            assert_eq!(
                entry_node_id(&path, section, index),
                entry_node_id(&path, section, index)
            );
            assert_eq!(
                exit_node_id(&path, section, index),
                exit_node_id(&path, section, index)
            );
        }
    }
}
