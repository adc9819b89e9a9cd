//! Journey cost estimation

use serde::Serialize;

use fuelwise_types::{DrivingProfile, Error, FuelKind, Result};

use crate::model::expense::round2;
use crate::model::Vehicle;

/// Litres in one UK gallon
const UK_GALLON_LITRES: f64 = 4.54609;

/// Cost breakdown for a planned journey. Derived, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEstimate {
    pub vehicle_id: String,
    pub vehicle_label: String,
    pub fuel_type: FuelKind,
    pub distance_miles: f64,
    pub profile: DrivingProfile,
    /// £ per litre, or £ per kWh for electric vehicles
    pub unit_price: f64,
    /// Litres for combustion, kWh for electric; 2-dp rounded
    pub fuel_used: f64,
    /// 2-dp rounded
    pub total_cost: f64,
}

impl JourneyEstimate {
    pub fn fuel_unit(&self) -> &'static str {
        match self.fuel_type {
            FuelKind::Electric => "kWh",
            _ => "litres",
        }
    }
}

/// Estimate consumption and cost for a journey.
///
/// The driving profile scales a combustion vehicle's rated mpg (Urban ×0.85,
/// Motorway ×1.15); electric consumption is profile-independent. Intermediate
/// arithmetic runs at full precision; only the reported quantities are
/// rounded.
pub fn estimate_journey(
    vehicle: &Vehicle,
    distance_miles: f64,
    profile: DrivingProfile,
    unit_price: f64,
) -> Result<JourneyEstimate> {
    if !(distance_miles.is_finite() && distance_miles > 0.0) {
        return Err(Error::InvalidInput(
            "distance must be a positive number of miles".into(),
        ));
    }
    if !(unit_price.is_finite() && unit_price > 0.0) {
        return Err(Error::InvalidInput(
            "unit price must be a positive number".into(),
        ));
    }

    let fuel_used = match vehicle.fuel_type {
        FuelKind::Electric => {
            let miles_per_kwh = vehicle
                .miles_per_kwh
                .filter(|m| *m > 0.0)
                .ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "{} has no miles-per-kWh figure",
                        vehicle.label()
                    ))
                })?;
            distance_miles / miles_per_kwh
        }
        FuelKind::Petrol | FuelKind::Diesel => {
            let mpg = vehicle.mpg.filter(|m| *m > 0.0).ok_or_else(|| {
                Error::InvalidInput(format!("{} has no mpg figure", vehicle.label()))
            })?;
            let adjusted_mpg = mpg * profile.mpg_factor();
            (distance_miles / adjusted_mpg) * UK_GALLON_LITRES
        }
    };

    Ok(JourneyEstimate {
        vehicle_id: vehicle.id.clone(),
        vehicle_label: vehicle.label(),
        fuel_type: vehicle.fuel_type,
        distance_miles,
        profile,
        unit_price,
        fuel_used: round2(fuel_used),
        total_cost: round2(fuel_used * unit_price),
    })
}

/// Typical £ per unit for a fuel kind, offered as a default when the caller
/// has no price to hand
pub fn suggested_unit_price(fuel: FuelKind) -> f64 {
    match fuel {
        FuelKind::Petrol => 1.43,
        FuelKind::Diesel => 1.50,
        FuelKind::Electric => 0.79,
    }
}
