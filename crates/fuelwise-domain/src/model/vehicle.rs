//! Vehicle catalog type definitions

use serde::{Deserialize, Serialize};

use fuelwise_types::FuelKind;

/// A vehicle from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Catalog entries may omit the id; the loader assigns `car-{index}`
    #[serde(default)]
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub fuel_type: FuelKind,
    /// Rated economy in miles per UK gallon (combustion only)
    #[serde(default)]
    pub mpg: Option<f64>,
    /// Rated economy in miles per kWh (electric only)
    #[serde(default, rename = "milesPerKWh")]
    pub miles_per_kwh: Option<f64>,
}

impl Vehicle {
    /// "Make Model" label used for search and display
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Economy figure with its unit, for display
    pub fn economy_label(&self) -> String {
        match self.fuel_type {
            FuelKind::Electric => {
                format!("{} mi/kWh", self.miles_per_kwh.unwrap_or(0.0))
            }
            _ => format!("{} mpg", self.mpg.unwrap_or(0.0)),
        }
    }
}
