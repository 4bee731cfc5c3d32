use fastpath_config::RoutingConfig;
use fastpath_core::error::RouteError;
use fastpath_core::models::Route;
use fastpath_core::traits::RoadNetworkSource;
use tracing::{error, info, warn};

use crate::{compute_fastest_path_with, SearchLimits};

/// Resolves city names against a [`RoadNetworkSource`], snapshots its roads
/// and runs the engine.
pub struct RoutePlanner<S> {
    network: S,
    limits: SearchLimits,
}

impl<S: RoadNetworkSource> RoutePlanner<S> {
    pub fn new(network: S) -> Self {
        Self {
            network,
            limits: SearchLimits::unbounded(),
        }
    }

    pub fn from_config(network: S, config: &RoutingConfig) -> Self {
        Self::new(network).with_limits(SearchLimits::from(config))
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn network(&self) -> &S {
        &self.network
    }

    pub fn find_fastest_path(
        &self,
        source_name: &str,
        destination_name: &str,
    ) -> Result<Route, RouteError> {
        let source = self.network.resolve_city(source_name)?;
        let destination = self.network.resolve_city(destination_name)?;

        info!(%source, %destination, "Finding fastest path");

        let edges = self.network.road_snapshot()?;

        match compute_fastest_path_with(&edges, &source, &destination, self.limits) {
            Ok(route) => {
                info!(
                    cities = route.path.len(),
                    total_minutes = route.total_weight,
                    "Found path"
                );
                Ok(route)
            }
            Err(err) if err.is_defect() => {
                error!(%source, %destination, error = %err, "routing engine defect");
                Err(err)
            }
            Err(err) => {
                warn!(%source, %destination, error = %err, "no usable route");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use fastpath_core::models::RoadEdge;
    use fastpath_core::InMemoryRoadNetwork;

    fn georgia() -> InMemoryRoadNetwork {
        InMemoryRoadNetwork::default()
            .with_road("Tbilisi", "Batumi", 360)
            .with_road("Batumi", "Gonio", 45)
            .with_road("Tbilisi", "Kutaisi", 240)
            .with_road("Kutaisi", "Gonio", 300)
    }

    #[test]
    fn finds_path_with_raw_names() {
        let planner = RoutePlanner::new(georgia());
        let route = planner.find_fastest_path(" tbilisi", "GONIO ").unwrap();
        assert_eq!(route.path, vec!["TBILISI", "BATUMI", "GONIO"]);
        assert_eq!(
            route.edges,
            vec![
                RoadEdge::new("TBILISI", "BATUMI", 360),
                RoadEdge::new("BATUMI", "GONIO", 45)
            ]
        );
        assert_eq!(route.total_weight, 405);
    }

    #[test]
    fn unknown_source_is_node_not_found() {
        let planner = RoutePlanner::new(georgia());
        let err = planner.find_fastest_path("Atlantis", "Gonio").unwrap_err();
        assert!(matches!(err, RouteError::NodeNotFound { ref name } if name == "Atlantis"));
    }

    #[test]
    fn unknown_destination_is_node_not_found() {
        let planner = RoutePlanner::new(georgia());
        let err = planner.find_fastest_path("Tbilisi", "Atlantis").unwrap_err();
        assert!(matches!(err, RouteError::NodeNotFound { .. }));
    }

    #[test]
    fn disconnected_cities_have_no_route() {
        let planner = RoutePlanner::new(georgia().with_city("Mestia"));
        let err = planner.find_fastest_path("Tbilisi", "Mestia").unwrap_err();
        assert!(matches!(
            err,
            RouteError::NoRouteFound { ref origin, ref destination }
                if origin == "TBILISI" && destination == "MESTIA"
        ));
    }

    #[test]
    fn config_budget_applies() {
        let planner = RoutePlanner::from_config(georgia(), &RoutingConfig { max_relaxations: 1 });
        let err = planner.find_fastest_path("Tbilisi", "Gonio").unwrap_err();
        assert!(matches!(err, RouteError::SearchBudgetExceeded { limit: 1 }));
    }

    struct BrokenSnapshot;

    impl RoadNetworkSource for BrokenSnapshot {
        fn resolve_city(&self, raw: &str) -> std::result::Result<String, RouteError> {
            Ok(raw.to_string())
        }

        fn road_snapshot(&self) -> Result<Vec<RoadEdge>> {
            anyhow::bail!("store is closed")
        }
    }

    #[test]
    fn snapshot_failures_surface_as_network_errors() {
        let planner = RoutePlanner::new(BrokenSnapshot);
        let err = planner.find_fastest_path("A", "B").unwrap_err();
        assert!(matches!(err, RouteError::Network(_)));
    }
}
