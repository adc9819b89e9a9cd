//! Ledger analytics
//!
//! Pure aggregations recomputed from the full record set on every query.
//! Personal expense logs are small, so nothing is cached or incremental.

use serde::Serialize;

use fuelwise_types::{ExpenseFilter, ExpenseFuel};

use crate::model::expense::round2;
use crate::model::ExpenseRecord;

/// Annual rollup for a given year and fuel filter
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSummary {
    pub total_spent: f64,
    /// Mean spend over months with at least one matching record; 0 when none
    pub avg_per_active_month: f64,
    /// Spend per fuel type, zero-sum groups omitted
    pub by_fuel_type: Vec<FuelBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelBreakdown {
    pub fuel_type: ExpenseFuel,
    pub total: f64,
}

fn matches(record: &ExpenseRecord, year: i32, filter: ExpenseFilter) -> bool {
    record.year_month().0 == year && filter.matches(record.fuel_type)
}

/// Total spend per calendar month of `year`, index 0 = January
pub fn monthly_totals(
    records: &[ExpenseRecord],
    year: i32,
    filter: ExpenseFilter,
) -> [f64; 12] {
    let mut totals = [0.0; 12];
    for record in records.iter().filter(|r| matches(r, year, filter)) {
        let (_, month) = record.year_month();
        totals[(month - 1) as usize] += record.total_cost;
    }
    totals
}

/// Records falling in (`year`, `month` 1-12) that pass the filter, in
/// ledger order
pub fn monthly_records(
    records: &[ExpenseRecord],
    year: i32,
    month: u32,
    filter: ExpenseFilter,
) -> Vec<&ExpenseRecord> {
    records
        .iter()
        .filter(|r| matches(r, year, filter) && r.year_month().1 == month)
        .collect()
}

/// Annual totals, per-active-month average, and per-fuel breakdown
pub fn annual_summary(
    records: &[ExpenseRecord],
    year: i32,
    filter: ExpenseFilter,
) -> AnnualSummary {
    let totals = monthly_totals(records, year, filter);
    let total_spent: f64 = totals.iter().sum();
    let active_months = totals.iter().filter(|t| **t > 0.0).count();

    let avg_per_active_month = if active_months > 0 {
        total_spent / active_months as f64
    } else {
        0.0
    };

    // Fixed enum order keeps the breakdown deterministic.
    let by_fuel_type = [ExpenseFuel::Petrol, ExpenseFuel::Diesel, ExpenseFuel::Ev]
        .into_iter()
        .filter_map(|fuel| {
            let total: f64 = records
                .iter()
                .filter(|r| matches(r, year, filter) && r.fuel_type == fuel)
                .map(|r| r.total_cost)
                .sum();
            (total > 0.0).then_some(FuelBreakdown { fuel_type: fuel, total: round2(total) })
        })
        .collect();

    AnnualSummary {
        total_spent: round2(total_spent),
        avg_per_active_month: round2(avg_per_active_month),
        by_fuel_type,
    }
}
