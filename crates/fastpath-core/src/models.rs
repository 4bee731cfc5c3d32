use serde::{Deserialize, Serialize};

/// A stored city. `name` is already normalized and is the node id the
/// routing engine works with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub id: u64,
    pub name: String,
}

/// A stored directed road. There is at most one road per ordered
/// `(from_city, to_city)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Road {
    pub id: u64,
    pub from_city: String,
    pub to_city: String,
    pub travel_time_minutes: u32,
}

/// Directed weighted edge as seen by the routing engine.
///
/// Serialized in the `{fromCity, toCity, travelTimeMinutes}` shape used by
/// route responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RoadEdge {
    #[serde(rename = "fromCity")]
    pub from: String,
    #[serde(rename = "toCity")]
    pub to: String,
    #[serde(rename = "travelTimeMinutes")]
    pub weight: u32,
}

impl RoadEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl From<&Road> for RoadEdge {
    fn from(road: &Road) -> Self {
        RoadEdge::new(road.from_city.clone(), road.to_city.clone(), road.travel_time_minutes)
    }
}

/// Raw, unvalidated request to create or update a road.
///
/// Travel time is signed so that negative input can be rejected with a
/// proper error instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoadRequest {
    pub from_city: String,
    pub to_city: String,
    pub travel_time_minutes: i64,
}

impl RoadRequest {
    pub fn new(from_city: impl Into<String>, to_city: impl Into<String>, minutes: i64) -> Self {
        Self {
            from_city: from_city.into(),
            to_city: to_city.into(),
            travel_time_minutes: minutes,
        }
    }
}

/// Result of a fastest-path query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    /// Node ids from source to destination, inclusive.
    #[serde(rename = "pathCities")]
    pub path: Vec<String>,
    /// One edge per consecutive pair in `path`.
    #[serde(rename = "pathRoads")]
    pub edges: Vec<RoadEdge>,
    #[serde(rename = "totalTravelTimeMinutes")]
    pub total_weight: u64,
}

impl Route {
    /// The trivial route for `source == destination`.
    pub fn stationary(node: impl Into<String>) -> Self {
        Self {
            path: vec![node.into()],
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}
