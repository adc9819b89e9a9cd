//! End-to-end flow across the stores and analytics

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use fuelwise_app::catalog::{builtin_vehicles, find_vehicle};
use fuelwise_app::journey::JourneyPlanner;
use fuelwise_app::repository::open_ledger_at;
use fuelwise_domain::model::ExpenseDraft;
use fuelwise_domain::service::{annual_summary, monthly_totals};
use fuelwise_store::{FileKeyValueStore, RecentVehicles};
use fuelwise_types::{DrivingProfile, ExpenseFilter, ExpenseFuel};

fn draft(station: &str, fuel: ExpenseFuel, price: f64, total: f64, month: u32) -> ExpenseDraft {
    ExpenseDraft {
        station: station.to_string(),
        fuel_type: fuel,
        price_per_unit: price,
        total_cost: total,
        timestamp: Utc.with_ymd_and_hms(2025, month, 15, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_ledger_survives_reopen_and_feeds_analytics() {
    let dir = tempdir().unwrap();

    {
        let mut ledger = open_ledger_at(dir.path().to_path_buf()).unwrap();
        ledger.add(draft("Shell Bedford", ExpenseFuel::Petrol, 1.43, 45.60, 3)).unwrap();
        ledger.add(draft("BP Pulse", ExpenseFuel::Ev, 0.79, 12.64, 3)).unwrap();
        ledger.add(draft("Esso Kempston", ExpenseFuel::Diesel, 1.48, 52.00, 4)).unwrap();
    }

    let ledger = open_ledger_at(dir.path().to_path_buf()).unwrap();
    assert_eq!(ledger.records().len(), 3);

    let totals = monthly_totals(ledger.records(), 2025, ExpenseFilter::All);
    assert!((totals[2] - 58.24).abs() < 1e-9);
    assert!((totals[3] - 52.00).abs() < 1e-9);

    let summary = annual_summary(ledger.records(), 2025, ExpenseFilter::All);
    assert!((summary.total_spent - 110.24).abs() < 0.01);
    assert!((summary.avg_per_active_month - 55.12).abs() < 0.01);
    assert_eq!(summary.by_fuel_type.len(), 3);

    let sum: f64 = totals.iter().sum();
    assert!((sum - summary.total_spent).abs() < 0.01);
}

#[test]
fn test_clearing_one_month_preserves_the_rest() {
    let dir = tempdir().unwrap();
    let mut ledger = open_ledger_at(dir.path().to_path_buf()).unwrap();
    ledger.add(draft("March A", ExpenseFuel::Petrol, 1.40, 30.00, 3)).unwrap();
    ledger.add(draft("March B", ExpenseFuel::Petrol, 1.40, 20.00, 3)).unwrap();
    ledger.add(draft("June", ExpenseFuel::Petrol, 1.40, 25.00, 6)).unwrap();

    let before = monthly_totals(ledger.records(), 2025, ExpenseFilter::All);
    ledger.clear_month(2025, 3, ExpenseFilter::All).unwrap();
    let after = monthly_totals(ledger.records(), 2025, ExpenseFilter::All);

    assert!(after[2].abs() < 1e-9);
    for month in 0..12 {
        if month != 2 {
            assert!((before[month] - after[month]).abs() < 1e-9);
        }
    }
}

#[test]
fn test_journey_planner_persists_recents_across_reopen() {
    let dir = tempdir().unwrap();
    let vehicles = builtin_vehicles().unwrap();
    let tesla = find_vehicle(&vehicles, "tesla").unwrap();
    let golf = find_vehicle(&vehicles, "golf").unwrap();

    {
        let store = FileKeyValueStore::open(dir.path().to_path_buf()).unwrap();
        let mut planner = JourneyPlanner::new(RecentVehicles::load(store).unwrap());
        planner.plan(tesla, 40.0, DrivingProfile::Mixed, None).unwrap();
        planner.plan(golf, 100.0, DrivingProfile::Motorway, Some(1.52)).unwrap();
    }

    let store = FileKeyValueStore::open(dir.path().to_path_buf()).unwrap();
    let recents = RecentVehicles::load(store).unwrap();
    let ids: Vec<&str> = recents.vehicles().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec![golf.id.as_str(), tesla.id.as_str()]);
}
