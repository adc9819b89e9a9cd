//! Great-circle distance between coordinates

use fuelwise_types::Coordinate;

/// Mean Earth radius in miles
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance in miles between two coordinates.
///
/// Uses the half-angle sine form so results reproduce the app's reference
/// distances to 2 decimal places.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}
