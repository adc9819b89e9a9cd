//! Journey planning use case
//!
//! Wraps the pure estimator with the one side effect the flow has: a
//! successful estimate pushes the vehicle onto the recent list, which the
//! store persists.

use fuelwise_domain::model::Vehicle;
use fuelwise_domain::service::{estimate_journey, suggested_unit_price, JourneyEstimate};
use fuelwise_store::{KeyValueStore, RecentVehicles};
use fuelwise_types::{DrivingProfile, Result};

pub struct JourneyPlanner<S: KeyValueStore> {
    recents: RecentVehicles<S>,
}

impl<S: KeyValueStore> JourneyPlanner<S> {
    pub fn new(recents: RecentVehicles<S>) -> Self {
        Self { recents }
    }

    /// Estimate a journey and record the vehicle as recently used.
    /// With no price given, the per-fuel suggested price is used.
    pub fn plan(
        &mut self,
        vehicle: &Vehicle,
        distance_miles: f64,
        profile: DrivingProfile,
        unit_price: Option<f64>,
    ) -> Result<JourneyEstimate> {
        let price = unit_price.unwrap_or_else(|| suggested_unit_price(vehicle.fuel_type));
        let estimate = estimate_journey(vehicle, distance_miles, profile, price)?;
        self.recents.record(vehicle)?;
        Ok(estimate)
    }

    pub fn recent_vehicles(&self) -> &[Vehicle] {
        self.recents.vehicles()
    }
}
