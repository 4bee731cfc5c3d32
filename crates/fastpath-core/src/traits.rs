use anyhow::Result;

use crate::error::RouteError;
use crate::models::RoadEdge;

/// Where the routing engine gets its inputs from: node resolution and a
/// point-in-time edge snapshot.
pub trait RoadNetworkSource: Send + Sync {
    /// Normalize `raw` and return the canonical city id, or
    /// [`RouteError::NodeNotFound`].
    fn resolve_city(&self, raw: &str) -> std::result::Result<String, RouteError>;

    /// Every road known at call time.
    fn road_snapshot(&self) -> Result<Vec<RoadEdge>>;
}
