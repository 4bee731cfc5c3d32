pub mod error;
pub mod memory;
pub mod models;
pub mod names;
pub mod traits;

pub use error::{RoadError, RouteError};
pub use memory::InMemoryRoadNetwork;
pub use models::{City, Road, RoadEdge, RoadRequest, Route};
pub use traits::RoadNetworkSource;
