use std::collections::BTreeSet;

use anyhow::Result;
use fastpath_config::NameCase;

use crate::error::RouteError;
use crate::models::RoadEdge;
use crate::names::normalize_city_name;
use crate::traits::RoadNetworkSource;

/// A [`RoadNetworkSource`] held entirely in memory.
///
/// Cities are registered explicitly or implicitly by the roads that touch
/// them. Edge order is preserved as supplied.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoadNetwork {
    cities: BTreeSet<String>,
    roads: Vec<RoadEdge>,
    case: NameCase,
}

impl InMemoryRoadNetwork {
    pub fn new(case: NameCase) -> Self {
        Self {
            case,
            ..Default::default()
        }
    }

    /// Register a city without roads. Blank names are ignored.
    pub fn with_city(mut self, name: &str) -> Self {
        if let Some(name) = normalize_city_name(name, self.case) {
            self.cities.insert(name);
        }
        self
    }

    /// Add a road; both endpoints are registered as cities.
    pub fn with_road(mut self, from: &str, to: &str, minutes: u32) -> Self {
        if let (Some(from), Some(to)) = (
            normalize_city_name(from, self.case),
            normalize_city_name(to, self.case),
        ) {
            self.cities.insert(from.clone());
            self.cities.insert(to.clone());
            self.roads.push(RoadEdge::new(from, to, minutes));
        }
        self
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }
}

impl RoadNetworkSource for InMemoryRoadNetwork {
    fn resolve_city(&self, raw: &str) -> std::result::Result<String, RouteError> {
        normalize_city_name(raw, self.case)
            .filter(|name| self.cities.contains(name))
            .ok_or_else(|| RouteError::NodeNotFound {
                name: raw.to_string(),
            })
    }

    fn road_snapshot(&self) -> Result<Vec<RoadEdge>> {
        Ok(self.roads.clone())
    }
}
