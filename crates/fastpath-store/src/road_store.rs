use crate::city_store::CityStore;
use crate::storage::{Store, Tree};
use anyhow::{anyhow, Result};
use fastpath_config::{Config, NameCase};
use fastpath_core::error::{RoadError, RouteError};
use fastpath_core::models::{City, Road, RoadEdge, RoadRequest};
use fastpath_core::names::normalize_city_name;
use fastpath_core::traits::RoadNetworkSource;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};

/// Why a batch upsert was not applied.
#[derive(Debug, Error)]
pub enum UpsertError {
    /// Request at `index` failed validation; nothing was written.
    #[error("road #{index}: {source}")]
    Invalid { index: usize, source: RoadError },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A request that passed validation, names already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidRoad {
    from: String,
    to: String,
    minutes: u32,
}

fn validate(request: &RoadRequest, case: NameCase) -> std::result::Result<ValidRoad, RoadError> {
    let from = normalize_city_name(&request.from_city, case)
        .ok_or(RoadError::EmptyCityName { field: "fromCity" })?;
    let to = normalize_city_name(&request.to_city, case)
        .ok_or(RoadError::EmptyCityName { field: "toCity" })?;
    let minutes = u32::try_from(request.travel_time_minutes).map_err(|_| {
        RoadError::InvalidTravelTime {
            value: request.travel_time_minutes,
            max: u32::MAX,
        }
    })?;
    if from == to {
        return Err(RoadError::SelfLoop { city: from });
    }
    Ok(ValidRoad { from, to, minutes })
}

/// `from` with each NUL escaped as `00 FF`, a `00` separator, then `to`.
/// UTF-8 never contains `FF`, so the separator is unambiguous and keys
/// still sort by origin, then destination.
fn road_key(from: &str, to: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(from.len() + to.len() + 1);
    for &byte in from.as_bytes() {
        key.push(byte);
        if byte == 0 {
            key.push(0xFF);
        }
    }
    key.push(0);
    key.extend_from_slice(to.as_bytes());
    key
}

/// Persistent road network: cities plus at most one directed road per
/// ordered city pair.
pub struct RoadStore {
    store: Store,
    cities: CityStore,
    roads_tree: Tree,
    next_id: AtomicU64,
    case: NameCase,
    write_lock: Mutex<()>,
}

impl RoadStore {
    pub fn open(path: &Path, case: NameCase) -> Result<Self> {
        let store = Store::open(path)?;
        let cities = CityStore::new(&store)?;
        let roads_tree = store.open_tree("roads")?;

        let last_id = roads_tree
            .values::<Road>()?
            .iter()
            .map(|road| road.id)
            .max()
            .unwrap_or(0);

        debug!(path = %path.display(), cities = cities.count(), roads = roads_tree.len(), "Opened road store");

        Ok(Self {
            store,
            cities,
            roads_tree,
            next_id: AtomicU64::new(last_id + 1),
            case,
            write_lock: Mutex::new(()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::open(&config.store.path, config.names.case)
    }

    pub fn name_case(&self) -> NameCase {
        self.case
    }

    /// Validate every request, then create missing cities and insert or
    /// update one road per request. Returns the saved roads in request order.
    ///
    /// A single invalid request rejects the whole batch before anything is
    /// written.
    pub fn upsert_roads(&self, requests: &[RoadRequest]) -> std::result::Result<Vec<Road>, UpsertError> {
        let valid = requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                validate(request, self.case).map_err(|source| UpsertError::Invalid { index, source })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow!("road store write lock poisoned"))?;

        let mut saved = Vec::with_capacity(valid.len());
        for road in valid {
            saved.push(self.upsert_one(road)?);
        }
        self.store.flush()?;
        Ok(saved)
    }

    /// Convenience wrapper for a single road.
    pub fn upsert_road(&self, request: &RoadRequest) -> std::result::Result<Road, UpsertError> {
        let mut saved = self.upsert_roads(std::slice::from_ref(request))?;
        saved
            .pop()
            .ok_or_else(|| UpsertError::Storage(anyhow!("upsert returned no road")))
    }

    fn upsert_one(&self, valid: ValidRoad) -> Result<Road> {
        let from = self.cities.get_or_create(&valid.from)?;
        let to = self.cities.get_or_create(&valid.to)?;
        let key = road_key(&from.name, &to.name);

        let road = match self.roads_tree.get_decoded::<_, Road>(&key)? {
            Some(existing) => {
                let road = Road {
                    travel_time_minutes: valid.minutes,
                    ..existing
                };
                info!(
                    id = road.id,
                    from = %road.from_city,
                    to = %road.to_city,
                    minutes = road.travel_time_minutes,
                    "Updated road"
                );
                road
            }
            None => {
                let road = Road {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    from_city: from.name,
                    to_city: to.name,
                    travel_time_minutes: valid.minutes,
                };
                info!(
                    id = road.id,
                    from = %road.from_city,
                    to = %road.to_city,
                    minutes = road.travel_time_minutes,
                    "Created road"
                );
                road
            }
        };

        self.roads_tree.insert_encoded(&key, &road)?;
        Ok(road)
    }

    pub fn get_road(&self, from: &str, to: &str) -> Result<Option<Road>> {
        match (
            normalize_city_name(from, self.case),
            normalize_city_name(to, self.case),
        ) {
            (Some(from), Some(to)) => self.roads_tree.get_decoded(road_key(&from, &to)),
            _ => Ok(None),
        }
    }

    /// All roads ordered by origin then destination name.
    pub fn list_roads(&self) -> Result<Vec<Road>> {
        self.roads_tree.values()
    }

    /// All cities ordered by name.
    pub fn list_cities(&self) -> Result<Vec<City>> {
        self.cities.list()
    }
}

impl RoadNetworkSource for RoadStore {
    fn resolve_city(&self, raw: &str) -> std::result::Result<String, RouteError> {
        let not_found = || RouteError::NodeNotFound {
            name: raw.to_string(),
        };
        let name = normalize_city_name(raw, self.case).ok_or_else(not_found)?;
        match self.cities.get(&name)? {
            Some(city) => Ok(city.name),
            None => Err(not_found()),
        }
    }

    fn road_snapshot(&self) -> Result<Vec<RoadEdge>> {
        Ok(self.list_roads()?.iter().map(RoadEdge::from).collect())
    }
}
