//! Station catalog types
//!
//! The catalog JSON distinguishes forecourts from EV chargers structurally:
//! a record is a charger iff it carries `plug_types`. That shape is resolved
//! once at load time into a tagged [`StationCategory`] rather than being
//! re-inspected per access.

use serde::{Deserialize, Serialize};

use fuelwise_types::{Coordinate, Error, Result};

/// A point of interest from the station catalog, category resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Coordinate,
    pub category: StationCategory,
}

/// Fuel forecourt or EV charge point, with the per-category pricing payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StationCategory {
    Fuel {
        /// Pump price in £/L, if published
        petrol_price: Option<f64>,
        diesel_price: Option<f64>,
    },
    Electric {
        plug_types: Vec<String>,
        max_charge_speed_kw: f64,
        /// Display string as published, e.g. "£0.79"
        cost_per_kwh: Option<String>,
    },
}

impl StationRecord {
    pub fn is_electric(&self) -> bool {
        matches!(self.category, StationCategory::Electric { .. })
    }

    /// Text fields the search box matches against
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        if self.name.to_lowercase().contains(&needle) {
            return true;
        }
        self.address
            .as_ref()
            .map(|a| a.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }

    /// Numeric £/kWh for an EV record, if present and parseable.
    /// Strips a leading currency symbol from the display string.
    pub fn cost_per_kwh_value(&self) -> Option<f64> {
        match &self.category {
            StationCategory::Electric { cost_per_kwh, .. } => cost_per_kwh
                .as_ref()
                .and_then(|s| s.trim().trim_start_matches('£').trim().parse::<f64>().ok()),
            StationCategory::Fuel { .. } => None,
        }
    }
}

/// Station id as found in the catalog JSON (numeric or string)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// A station as it appears in the catalog file, before category resolution.
/// Coordinates appear either flat or under a nested `coordinates` object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    id: RawId,
    name: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    coordinates: Option<Coordinate>,
    #[serde(default)]
    petrol_price: Option<f64>,
    #[serde(default)]
    diesel_price: Option<f64>,
    #[serde(default)]
    plug_types: Option<Vec<String>>,
    #[serde(default, rename = "max_speed_kW")]
    max_speed_kw: Option<f64>,
    #[serde(default, rename = "cost_per_kWh")]
    cost_per_kwh: Option<String>,
}

impl RawStation {
    /// Resolve the structural category and coordinate shape
    pub fn resolve(self) -> Result<StationRecord> {
        let coordinate = match (self.latitude, self.longitude, self.coordinates) {
            (Some(lat), Some(lon), _) => Coordinate::new(lat, lon),
            (_, _, Some(c)) => c,
            _ => {
                return Err(Error::Catalog(format!(
                    "station '{}' has no coordinates",
                    self.name
                )))
            }
        };

        let category = match self.plug_types {
            Some(plug_types) => StationCategory::Electric {
                plug_types,
                max_charge_speed_kw: self.max_speed_kw.unwrap_or(0.0),
                cost_per_kwh: self.cost_per_kwh,
            },
            None => StationCategory::Fuel {
                petrol_price: self.petrol_price,
                diesel_price: self.diesel_price,
            },
        };

        Ok(StationRecord {
            id: self.id.into_string(),
            name: self.name,
            address: self.address,
            coordinate,
            category,
        })
    }
}
