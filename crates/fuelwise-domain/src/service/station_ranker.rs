//! Station ranking by distance or price

use fuelwise_types::{Coordinate, FuelPreference, SortKey};

use crate::model::{StationCategory, StationRecord};
use crate::service::distance::distance_miles;

/// Order filtered stations for display.
///
/// Distance mode sorts ascending by great-circle distance from `position`.
/// Price mode sorts ascending by the relevant unit price: £/kWh for EV
/// records, petrol or diesel pump price per `preference` otherwise; records
/// without a usable price sort last. The sort is stable, so equal keys keep
/// their catalog order.
pub fn rank_stations<'a>(
    records: Vec<&'a StationRecord>,
    position: Coordinate,
    sort_key: SortKey,
    preference: FuelPreference,
) -> Vec<&'a StationRecord> {
    let mut keyed: Vec<(f64, &StationRecord)> = records
        .into_iter()
        .map(|station| {
            let key = match sort_key {
                SortKey::Distance => distance_miles(position, station.coordinate),
                SortKey::Price => price_key(station, preference),
            };
            (key, station)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, station)| station).collect()
}

fn price_key(station: &StationRecord, preference: FuelPreference) -> f64 {
    let price = match &station.category {
        StationCategory::Electric { .. } => station.cost_per_kwh_value(),
        StationCategory::Fuel { petrol_price, diesel_price } => match preference {
            FuelPreference::Petrol => *petrol_price,
            FuelPreference::Diesel => *diesel_price,
        },
    };
    price.unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawStation;

    fn parse(raw: &str) -> Vec<StationRecord> {
        serde_json::from_str::<Vec<RawStation>>(raw)
            .unwrap()
            .into_iter()
            .map(|r| r.resolve().unwrap())
            .collect()
    }

    fn position() -> Coordinate {
        Coordinate::new(52.13, -0.46)
    }

    fn fuel_catalog() -> Vec<StationRecord> {
        parse(
            r#"[
            {"id": "far", "name": "Far", "latitude": 52.50, "longitude": -0.46,
             "petrol_price": 1.38, "diesel_price": 1.46},
            {"id": "near", "name": "Near", "latitude": 52.14, "longitude": -0.46,
             "petrol_price": 1.43, "diesel_price": 1.40},
            {"id": "mid", "name": "Mid", "latitude": 52.20, "longitude": -0.46,
             "petrol_price": 1.43},
            {"id": "unpriced", "name": "Unpriced", "latitude": 52.15, "longitude": -0.46}
        ]"#,
        )
    }

    #[test]
    fn test_distance_order_is_non_decreasing() {
        let catalog = fuel_catalog();
        let ranked = rank_stations(
            catalog.iter().collect(),
            position(),
            SortKey::Distance,
            FuelPreference::Petrol,
        );
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "unpriced", "mid", "far"]);

        let distances: Vec<f64> = ranked
            .iter()
            .map(|s| distance_miles(position(), s.coordinate))
            .collect();
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_price_mode_respects_fuel_preference() {
        let catalog = fuel_catalog();
        let by_petrol = rank_stations(
            catalog.iter().collect(),
            position(),
            SortKey::Price,
            FuelPreference::Petrol,
        );
        // Equal petrol prices (near, mid) keep catalog order; unpriced last.
        let ids: Vec<&str> = by_petrol.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["far", "near", "mid", "unpriced"]);

        let by_diesel = rank_stations(
            catalog.iter().collect(),
            position(),
            SortKey::Price,
            FuelPreference::Diesel,
        );
        let ids: Vec<&str> = by_diesel.iter().map(|s| s.id.as_str()).collect();
        // "mid" has no diesel price and joins "unpriced" at the back, in
        // catalog order.
        assert_eq!(ids, vec!["near", "far", "mid", "unpriced"]);
    }

    #[test]
    fn test_ev_price_mode_parses_display_strings() {
        let catalog = parse(
            r#"[
            {"id": "a", "name": "A", "latitude": 52.0, "longitude": -0.4,
             "plug_types": ["CCS"], "max_speed_kW": 150.0, "cost_per_kWh": "£0.85"},
            {"id": "b", "name": "B", "latitude": 52.0, "longitude": -0.4,
             "plug_types": ["Type 2"], "max_speed_kW": 22.0, "cost_per_kWh": "£0.49"},
            {"id": "c", "name": "C", "latitude": 52.0, "longitude": -0.4,
             "plug_types": ["CCS"], "max_speed_kW": 50.0, "cost_per_kWh": "call us"},
            {"id": "d", "name": "D", "latitude": 52.0, "longitude": -0.4,
             "plug_types": ["CCS"], "max_speed_kW": 50.0}
        ]"#,
        );
        let ranked = rank_stations(
            catalog.iter().collect(),
            position(),
            SortKey::Price,
            FuelPreference::Petrol,
        );
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }
}
