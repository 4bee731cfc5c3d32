use crate::storage::{Store, Tree};
use anyhow::Result;
use fastpath_core::models::City;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Cities keyed by normalized name.
pub struct CityStore {
    cities_tree: Tree,
    next_id: AtomicU64,
}

impl CityStore {
    pub fn new(store: &Store) -> Result<Self> {
        let cities_tree = store.open_tree("cities")?;

        // Keys are names, so the highest id has to be found by scanning.
        let last_id = cities_tree
            .values::<City>()?
            .iter()
            .map(|city| city.id)
            .max()
            .unwrap_or(0);

        Ok(Self {
            cities_tree,
            next_id: AtomicU64::new(last_id + 1),
        })
    }

    pub fn get(&self, name: &str) -> Result<Option<City>> {
        self.cities_tree.get_decoded(name.as_bytes())
    }

    pub fn contains(&self, name: &str) -> Result<bool> {
        self.cities_tree.contains_key(name.as_bytes())
    }

    /// Return the city named `name`, creating it if needed. `name` must
    /// already be normalized.
    pub fn get_or_create(&self, name: &str) -> Result<City> {
        if let Some(city) = self.get(name)? {
            return Ok(city);
        }

        let city = City {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
        };
        self.cities_tree.insert_encoded(name.as_bytes(), &city)?;
        info!(id = city.id, name = %city.name, "Created city");
        Ok(city)
    }

    /// All cities ordered by name.
    pub fn list(&self) -> Result<Vec<City>> {
        self.cities_tree.values()
    }

    pub fn count(&self) -> usize {
        self.cities_tree.len()
    }
}
