//! Output formatting module

use serde::Serialize;

use fuelwise_domain::model::{ExpenseRecord, StationCategory, StationRecord, Vehicle};
use fuelwise_domain::service::{distance_miles, AnnualSummary, JourneyEstimate};
use fuelwise_types::{Coordinate, OutputFormat, Result};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Station row with its distance from the user, for JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NearbyStation<'a> {
    #[serde(flatten)]
    station: &'a StationRecord,
    distance_miles: f64,
}

fn price_summary(station: &StationRecord) -> String {
    match &station.category {
        StationCategory::Fuel { petrol_price, diesel_price } => {
            let petrol = petrol_price
                .map(|p| format!("£{p:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let diesel = diesel_price
                .map(|p| format!("£{p:.2}"))
                .unwrap_or_else(|| "-".to_string());
            format!("Petrol {petrol} / Diesel {diesel}")
        }
        StationCategory::Electric { plug_types, max_charge_speed_kw, cost_per_kwh } => {
            let cost = cost_per_kwh.as_deref().unwrap_or("-");
            format!("{cost}/kWh • {max_charge_speed_kw:.0} kW • {}", plug_types.join(", "))
        }
    }
}

pub fn output_stations(
    format: OutputFormat,
    ranked: &[&StationRecord],
    position: Coordinate,
) -> Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<NearbyStation<'_>> = ranked
            .iter()
            .map(|station| NearbyStation {
                station,
                distance_miles: distance_miles(position, station.coordinate),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No stations found");
        return Ok(());
    }

    for station in ranked {
        let distance = distance_miles(position, station.coordinate);
        println!("{}  ({:.2} mi)", station.name, distance);
        if let Some(ref address) = station.address {
            println!("    {}", address);
        }
        println!("    {}", price_summary(station));
    }
    Ok(())
}

pub fn output_estimate(format: OutputFormat, estimate: &JourneyEstimate) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(estimate)?);
        return Ok(());
    }

    println!("\nJourney Estimate");
    println!("================");
    println!("Vehicle:       {} ({})", estimate.vehicle_label, estimate.fuel_type);
    println!("Distance:      {:.2} miles", estimate.distance_miles);
    println!("Driving type:  {}", estimate.profile);
    println!(
        "{}:   {:.2} {}",
        if estimate.fuel_unit() == "kWh" { "Energy used" } else { "Fuel used  " },
        estimate.fuel_used,
        estimate.fuel_unit()
    );
    println!("Cost per unit: £{:.2}", estimate.unit_price);
    println!("Total cost:    £{:.2}", estimate.total_cost);
    Ok(())
}

pub fn output_vehicles(format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No recent cars");
        return Ok(());
    }

    for vehicle in vehicles {
        println!(
            "{} ({}) • {} • {}",
            vehicle.label(),
            vehicle.year,
            vehicle.fuel_type,
            vehicle.economy_label()
        );
    }
    Ok(())
}

pub fn output_expense(format: OutputFormat, record: &ExpenseRecord) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!(
        "[{}] {} • {} • £{:.2} for {} {} • {}",
        record.id,
        record.station,
        record.fuel_type,
        record.total_cost,
        record.quantity,
        record.fuel_type.unit(),
        record.timestamp.format("%Y-%m-%d")
    );
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct YearReport<'a> {
    year: i32,
    monthly_totals: &'a [f64; 12],
    summary: &'a AnnualSummary,
}

pub fn output_report(
    format: OutputFormat,
    year: i32,
    totals: &[f64; 12],
    summary: &AnnualSummary,
) -> Result<()> {
    if format == OutputFormat::Json {
        let report = YearReport { year, monthly_totals: totals, summary };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\nSpending Logs ({year})");
    println!("=====================");
    for (month, total) in MONTHS.iter().zip(totals.iter()) {
        println!("{:<10} £{:.2}", month, total);
    }
    println!();
    println!("Total spent:          £{:.2}", summary.total_spent);
    println!("Avg per active month: £{:.2}", summary.avg_per_active_month);
    if !summary.by_fuel_type.is_empty() {
        println!("By fuel type:");
        for entry in &summary.by_fuel_type {
            println!("  {:<7} £{:.2}", entry.fuel_type.to_string(), entry.total);
        }
    }
    Ok(())
}

pub fn output_month(
    format: OutputFormat,
    year: i32,
    month: u32,
    records: &[&ExpenseRecord],
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let name = MONTHS[(month - 1) as usize];
    if records.is_empty() {
        println!("No entries for {name} {year}");
        return Ok(());
    }

    println!("\n{name} {year}");
    for record in records {
        output_expense(format, record)?;
    }
    Ok(())
}
