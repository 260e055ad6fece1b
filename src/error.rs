use crate::scenario::Id;
use thiserror::Error;

/// A scenario that is structurally incomplete. None of these have a
/// transient cause, so the caller decides whether to skip the route or
/// abort the whole transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedScenario {
    #[error("scenario is missing the `routes` collection")]
    MissingRoutes,

    #[error("route at index {index} is missing `id`")]
    MissingRouteId { index: usize },

    #[error("route {route} is missing the `route_paths` collection")]
    MissingRoutePaths { route: Id },

    #[error("route {route}: path at index {index} is missing `id`")]
    MissingPathId { route: Id, index: usize },

    #[error("route {route} path {path} is missing the `route_sections` collection")]
    MissingRouteSections { route: Id, path: Id },

    #[error("route {route} path {path}: section at index {index} is missing `sequence_number`")]
    MissingSequenceNumber { route: Id, path: Id, index: usize },
}

/// The attribute table has no entry for an edge. The table and the graph
/// are supposed to describe the same sections, so a miss means the two
/// sources are out of sync and no default is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no section attributes for path {path} sequence number {sequence_number}")]
pub struct MissingSectionAttributes {
    pub path: Id,
    pub sequence_number: i64,
}
