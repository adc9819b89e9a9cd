//! Expense ledger record types
//!
//! The persisted JSON keeps the field names the mobile app wrote to device
//! storage (`pricePerUnit`, `litres`, ISO-8601 `date`), so an existing
//! ledger file loads unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fuelwise_types::{Error, ExpenseFuel, Result};

/// Round to 2 decimal places for stored/displayed amounts
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A single refuelling/charging expense in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: i64,
    pub station: String,
    pub fuel_type: ExpenseFuel,
    /// £ per litre, or £ per kWh for EV entries
    pub price_per_unit: f64,
    pub total_cost: f64,
    /// Purchased quantity in litres (or kWh), derived from cost / price
    #[serde(rename = "litres")]
    pub quantity: f64,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Calendar (year, month 1-12) bucket of this expense
    pub fn year_month(&self) -> (i32, u32) {
        use chrono::Datelike;
        (self.timestamp.year(), self.timestamp.month())
    }
}

/// User-supplied fields for a new or edited expense
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub station: String,
    pub fuel_type: ExpenseFuel,
    pub price_per_unit: f64,
    pub total_cost: f64,
    pub timestamp: DateTime<Utc>,
}

impl ExpenseDraft {
    /// Validate and materialise the draft under the given id.
    /// The purchased quantity is derived, 2-dp rounded.
    pub fn into_record(self, id: i64) -> Result<ExpenseRecord> {
        if self.station.trim().is_empty() {
            return Err(Error::InvalidInput("station name is required".into()));
        }
        if !(self.price_per_unit.is_finite() && self.price_per_unit > 0.0) {
            return Err(Error::InvalidInput(
                "price per unit must be a positive number".into(),
            ));
        }
        if !(self.total_cost.is_finite() && self.total_cost > 0.0) {
            return Err(Error::InvalidInput(
                "total cost must be a positive number".into(),
            ));
        }

        Ok(ExpenseRecord {
            id,
            station: self.station,
            fuel_type: self.fuel_type,
            price_per_unit: self.price_per_unit,
            total_cost: self.total_cost,
            quantity: round2(self.total_cost / self.price_per_unit),
            timestamp: self.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            station: "Shell Bedford".to_string(),
            fuel_type: ExpenseFuel::Petrol,
            price_per_unit: 1.42,
            total_cost: 45.60,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 25, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_quantity_is_derived_and_rounded() {
        let record = draft().into_record(1).unwrap();
        assert!((record.quantity - 32.11).abs() < 0.001);
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let mut d = draft();
        d.price_per_unit = 0.0;
        assert!(d.into_record(1).is_err());

        let mut d = draft();
        d.total_cost = -3.0;
        assert!(d.into_record(1).is_err());

        let mut d = draft();
        d.price_per_unit = f64::NAN;
        assert!(d.into_record(1).is_err());
    }

    #[test]
    fn test_rejects_blank_station() {
        let mut d = draft();
        d.station = "  ".to_string();
        assert!(d.into_record(1).is_err());
    }

    #[test]
    fn test_persisted_field_names() {
        let record = draft().into_record(7).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"pricePerUnit\":1.42"));
        assert!(json.contains("\"litres\":"));
        assert!(json.contains("\"date\":\"2025-03-25T10:00:00Z\""));

        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_year_month_bucket() {
        let record = draft().into_record(1).unwrap();
        assert_eq!(record.year_month(), (2025, 3));
    }
}
