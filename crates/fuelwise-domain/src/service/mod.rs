//! Domain services

pub mod analytics;
pub mod distance;
pub mod journey;
pub mod station_filter;
pub mod station_ranker;

pub use analytics::{annual_summary, monthly_records, monthly_totals, AnnualSummary};
pub use distance::distance_miles;
pub use journey::{estimate_journey, suggested_unit_price, JourneyEstimate};
pub use station_filter::filter_stations;
pub use station_ranker::rank_stations;
