use serde::Deserialize;
use serde_json::{Map, Value};

use crate::scenario::Id;

/// Wire shape of a scenario file. Required fields are `Option` so that a
/// missing one is reported by the conversion step together with the
/// route/path/index it belongs to, instead of as a bare parse error.
#[derive(Deserialize, Debug)]
pub struct Scenario {
    pub routes: Option<Vec<Route>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct Route {
    pub id: Option<Id>,
    pub route_paths: Option<Vec<RoutePath>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One alternative traversal of a route.
#[derive(Deserialize, Debug)]
pub struct RoutePath {
    pub id: Option<Id>,
    pub route_sections: Option<Vec<RouteSection>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct RouteSection {
    pub sequence_number: Option<i64>,

    /// Junction markers shared between paths. Some instances omit the
    /// field, some carry an explicit `null`; both mean "no marker".
    pub route_alternative_marker_at_entry: Option<Vec<Id>>,
    pub route_alternative_marker_at_exit: Option<Vec<Id>>,

    /// Everything else on a section (penalty, running time, ...) is
    /// carried through to the built edges unchanged.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}
