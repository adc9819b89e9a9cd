//! Static catalog loading
//!
//! The station and vehicle catalogs are fixed datasets, loaded once at
//! startup and never mutated. A trimmed copy of each ships embedded in the
//! binary; callers can point at their own files instead.

use std::path::Path;

use fuelwise_domain::model::{RawStation, StationRecord, Vehicle};
use fuelwise_types::{Error, Result};

const BUILTIN_STATIONS: &str = include_str!("../data/stations.json");
const BUILTIN_CARS: &str = include_str!("../data/cars.json");

fn resolve_stations(raw: Vec<RawStation>) -> Result<Vec<StationRecord>> {
    raw.into_iter().map(RawStation::resolve).collect()
}

/// Catalog entries without an id are assigned `car-{index}`, so every
/// vehicle can be tracked in the recent list
fn assign_vehicle_ids(mut vehicles: Vec<Vehicle>) -> Vec<Vehicle> {
    for (index, vehicle) in vehicles.iter_mut().enumerate() {
        if vehicle.id.is_empty() {
            vehicle.id = format!("car-{index}");
        }
    }
    vehicles
}

/// The station catalog shipped with the binary
pub fn builtin_stations() -> Result<Vec<StationRecord>> {
    resolve_stations(serde_json::from_str(BUILTIN_STATIONS)?)
}

/// The vehicle catalog shipped with the binary
pub fn builtin_vehicles() -> Result<Vec<Vehicle>> {
    Ok(assign_vehicle_ids(serde_json::from_str(BUILTIN_CARS)?))
}

/// Load a station catalog from a JSON file
pub fn load_stations(path: &Path) -> Result<Vec<StationRecord>> {
    let content = std::fs::read_to_string(path)?;
    resolve_stations(serde_json::from_str(&content)?)
}

/// Load a vehicle catalog from a JSON file
pub fn load_vehicles(path: &Path) -> Result<Vec<Vehicle>> {
    let content = std::fs::read_to_string(path)?;
    Ok(assign_vehicle_ids(serde_json::from_str(&content)?))
}

/// Case-insensitive substring match over "Make Model"
pub fn vehicle_search<'a>(catalog: &'a [Vehicle], query: &str) -> Vec<&'a Vehicle> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|v| v.label().to_lowercase().contains(&needle))
        .collect()
}

/// Resolve a search query to a single vehicle.
///
/// An exact (case-insensitive) label match wins outright; otherwise the
/// query must narrow the catalog to one entry.
pub fn find_vehicle<'a>(catalog: &'a [Vehicle], query: &str) -> Result<&'a Vehicle> {
    let matches = vehicle_search(catalog, query);

    if let Some(exact) = matches
        .iter()
        .find(|v| v.label().eq_ignore_ascii_case(query.trim()))
    {
        return Ok(*exact);
    }

    match matches.as_slice() {
        [] => Err(Error::VehicleNotFound(format!("no car matches '{query}'"))),
        [single] => Ok(*single),
        many => Err(Error::VehicleNotFound(format!(
            "'{query}' is ambiguous: {}",
            many.iter()
                .map(|v| v.label())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}
