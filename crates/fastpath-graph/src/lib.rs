//! Fastest-path engine over a road snapshot.
//!
//! Every query builds its own [`RoadNetwork`], runs [`ShortestPathSearch`],
//! walks the predecessor links back and assembles a [`Route`]. Nothing is
//! shared between queries, so concurrent calls need no coordination.

pub mod dijkstra;
pub mod network;
pub mod planner;
pub mod route;

pub use dijkstra::{SearchLimits, SearchOutcome, SearchStats, ShortestPathSearch};
pub use network::{OutgoingRoad, RoadNetwork};
pub use planner::RoutePlanner;
pub use route::assemble_route;

use fastpath_core::error::RouteError;
use fastpath_core::models::{RoadEdge, Route};

/// Minimum-weight route from `source` to `destination` over `edges`.
///
/// Unreachable destinations yield [`RouteError::NoRouteFound`].
pub fn compute_fastest_path(
    edges: &[RoadEdge],
    source: &str,
    destination: &str,
) -> Result<Route, RouteError> {
    compute_fastest_path_with(edges, source, destination, SearchLimits::unbounded())
}

/// [`compute_fastest_path`] with a relaxation budget.
pub fn compute_fastest_path_with(
    edges: &[RoadEdge],
    source: &str,
    destination: &str,
    limits: SearchLimits,
) -> Result<Route, RouteError> {
    if source == destination {
        return Ok(Route::stationary(source));
    }

    let network = RoadNetwork::from_edges(edges);
    let outcome = ShortestPathSearch::new(&network)
        .with_limits(limits)
        .run(source, destination)?;
    let path = outcome.reconstruct_path()?;
    assemble_route(&network, path, outcome.target_distance())
}
