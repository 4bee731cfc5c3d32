use fastpath_core::error::RouteError;
use fastpath_core::models::{RoadEdge, Route};

use crate::network::RoadNetwork;

/// Pair every consecutive step of `path` with the road it uses and total the
/// weights.
///
/// The cheapest of any parallel roads is reported, matching what relaxation
/// settled on. `expected_total` is the distance the search computed for the
/// last node; any disagreement is a defect.
pub fn assemble_route(
    network: &RoadNetwork,
    path: Vec<String>,
    expected_total: u64,
) -> Result<Route, RouteError> {
    let mut edges = Vec::with_capacity(path.len().saturating_sub(1));
    let mut total: u64 = 0;

    for step in path.windows(2) {
        let (from, to) = (&step[0], &step[1]);
        let road = network
            .cheapest_road(from, to)
            .ok_or_else(|| RouteError::MissingEdge {
                from: from.clone(),
                to: to.clone(),
            })?;
        total += u64::from(road.weight);
        edges.push(RoadEdge::new(from.clone(), to.clone(), road.weight));
    }

    if total != expected_total {
        return Err(RouteError::InconsistentTotal {
            expected: expected_total,
            actual: total,
        });
    }

    Ok(Route {
        path,
        edges,
        total_weight: total,
    })
}
