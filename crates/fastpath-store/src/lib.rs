//! sled-backed persistence for cities and roads.

pub mod city_store;
pub mod road_store;
pub mod storage;

pub use city_store::CityStore;
pub use road_store::{RoadStore, UpsertError};
pub use storage::{Store, Tree};
