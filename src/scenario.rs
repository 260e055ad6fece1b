use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::MalformedScenario;
use crate::raw_scenario;

/// Identifier of a route, path or junction marker. The challenge data
/// writes ids both as JSON strings and as JSON numbers; either form
/// deserializes into the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Id {
        Id(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Id {
        Id(s)
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Id {
        Id(n.to_string())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Id, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Id(n.to_string()),
            Raw::Text(s) => Id(s),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub id: Id,
    pub route_paths: Vec<RoutePath>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutePath {
    pub id: Id,
    pub route_sections: Vec<RouteSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteSection {
    pub sequence_number: i64,
    pub markers_at_entry: Vec<Id>,
    pub markers_at_exit: Vec<Id>,
    pub attrs: Map<String, Value>,
}

/// Checks the raw scenario once and produces the fully-required model that
/// the rest of the crate traverses without further probing.
pub fn convert_raw(raw: &raw_scenario::Scenario) -> Result<Scenario, MalformedScenario> {
    let raw_routes = raw.routes.as_ref().ok_or(MalformedScenario::MissingRoutes)?;

    let mut routes = Vec::with_capacity(raw_routes.len());
    for (route_index, raw_route) in raw_routes.iter().enumerate() {
        let route_id = raw_route
            .id
            .clone()
            .ok_or(MalformedScenario::MissingRouteId { index: route_index })?;

        let raw_paths =
            raw_route
                .route_paths
                .as_ref()
                .ok_or_else(|| MalformedScenario::MissingRoutePaths {
                    route: route_id.clone(),
                })?;

        let mut route_paths = Vec::with_capacity(raw_paths.len());
        for (path_index, raw_path) in raw_paths.iter().enumerate() {
            let path_id = raw_path
                .id
                .clone()
                .ok_or_else(|| MalformedScenario::MissingPathId {
                    route: route_id.clone(),
                    index: path_index,
                })?;

            let raw_sections = raw_path.route_sections.as_ref().ok_or_else(|| {
                MalformedScenario::MissingRouteSections {
                    route: route_id.clone(),
                    path: path_id.clone(),
                }
            })?;

            let mut route_sections = Vec::with_capacity(raw_sections.len());
            for (section_index, raw_section) in raw_sections.iter().enumerate() {
                let sequence_number = raw_section.sequence_number.ok_or_else(|| {
                    MalformedScenario::MissingSequenceNumber {
                        route: route_id.clone(),
                        path: path_id.clone(),
                        index: section_index,
                    }
                })?;

                route_sections.push(RouteSection {
                    sequence_number,
                    markers_at_entry: raw_section
                        .route_alternative_marker_at_entry
                        .clone()
                        .unwrap_or_default(),
                    markers_at_exit: raw_section
                        .route_alternative_marker_at_exit
                        .clone()
                        .unwrap_or_default(),
                    attrs: raw_section.attributes.clone(),
                });
            }

            route_paths.push(RoutePath {
                id: path_id,
                route_sections,
            });
        }

        routes.push(Route {
            id: route_id,
            route_paths,
        });
    }

    Ok(Scenario { routes })
}
