use thiserror::Error;

/// Failures of a fastest-path query.
///
/// `NodeNotFound`, `NoRouteFound` and `SearchBudgetExceeded` are expected
/// outcomes the caller can act on. `PredecessorChainBroken`, `MissingEdge` and
/// `InconsistentTotal` mean the engine itself is wrong; see [`RouteError::is_defect`].
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("City not found: {name}")]
    NodeNotFound { name: String },

    #[error("No route found between {origin} and {destination}")]
    NoRouteFound { origin: String, destination: String },

    #[error("Search gave up after {limit} relaxations")]
    SearchBudgetExceeded { limit: usize },

    #[error("Predecessor chain from {destination} broke at {at} before reaching {origin}")]
    PredecessorChainBroken {
        origin: String,
        destination: String,
        at: String,
    },

    #[error("Route steps from {from} to {to} but no such road exists")]
    MissingEdge { from: String, to: String },

    #[error("Assembled route weighs {actual} but the search computed {expected}")]
    InconsistentTotal { expected: u64, actual: u64 },

    #[error("Road network unavailable: {0}")]
    Network(#[from] anyhow::Error),
}

impl RouteError {
    /// True for internal consistency failures that indicate a bug.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            RouteError::PredecessorChainBroken { .. }
                | RouteError::MissingEdge { .. }
                | RouteError::InconsistentTotal { .. }
        )
    }

    /// True for outcomes a user can fix by asking a different question.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            RouteError::NodeNotFound { .. } | RouteError::NoRouteFound { .. }
        )
    }
}

/// Rejected road input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoadError {
    #[error("{field} cannot be empty")]
    EmptyCityName { field: &'static str },

    #[error("Travel time must be between 0 and {max}, got {value}")]
    InvalidTravelTime { value: i64, max: u32 },

    #[error("A road cannot connect a city to itself: {city}")]
    SelfLoop { city: String },
}
