//! Recently used vehicles
//!
//! A most-recently-used list, capacity 5, deduplicated by vehicle id.
//! The only mutable vehicle state in the system; the catalog itself is
//! read-only.

use fuelwise_domain::model::Vehicle;
use fuelwise_types::{Error, Result};

use crate::kv::KeyValueStore;

/// Storage key the mobile app used for the recent-car list
pub const RECENT_VEHICLES_KEY: &str = "@recentCars";

const CAPACITY: usize = 5;

pub struct RecentVehicles<S: KeyValueStore> {
    store: S,
    vehicles: Vec<Vehicle>,
}

impl<S: KeyValueStore> RecentVehicles<S> {
    /// Load the list from the collaborator, fail-soft to empty
    pub fn load(store: S) -> Result<Self> {
        let vehicles: Vec<Vehicle> = match store.get(RECENT_VEHICLES_KEY)? {
            Some(payload) => serde_json::from_str(&payload).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { store, vehicles })
    }

    /// Most-recent-first
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Move the vehicle to the front, dropping any older entry with the
    /// same id and anything beyond capacity, then persist
    pub fn record(&mut self, vehicle: &Vehicle) -> Result<()> {
        self.vehicles.retain(|v| v.id != vehicle.id);
        self.vehicles.insert(0, vehicle.clone());
        self.vehicles.truncate(CAPACITY);
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.vehicles)
            .map_err(|e| Error::Persistence(e.to_string()))?;
        self.store
            .set(RECENT_VEHICLES_KEY, &payload)
            .map_err(|e| Error::Persistence(e.to_string()))
    }
}
