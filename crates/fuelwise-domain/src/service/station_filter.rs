//! Station catalog filtering

use crate::model::StationRecord;

/// Select catalog records by structural category and search text.
///
/// `electric` keeps EV charge points; otherwise fuel forecourts. The query
/// is a case-insensitive substring over name and address; empty matches all.
/// Catalog order is preserved; ranking is a separate step.
pub fn filter_stations<'a>(
    catalog: &'a [StationRecord],
    electric: bool,
    query: &str,
) -> Vec<&'a StationRecord> {
    catalog
        .iter()
        .filter(|s| s.is_electric() == electric && s.matches_query(query))
        .collect()
}
