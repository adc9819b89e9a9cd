//! Command handlers

use chrono::{DateTime, NaiveDate, Utc};

use fuelwise_app::catalog::{builtin_stations, builtin_vehicles, find_vehicle, load_stations, load_vehicles};
use fuelwise_app::config::Config;
use fuelwise_app::repository::{open_ledger, open_planner, open_recents};
use fuelwise_domain::model::ExpenseDraft;
use fuelwise_domain::service::{annual_summary, filter_stations, monthly_records, monthly_totals, rank_stations};
use fuelwise_types::{Coordinate, Error, ExpenseFilter, OutputFormat, Result};

use crate::cli::{Cli, Commands, LogAction};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Nearby { lat, lon, ev, query, sort, fuel, stations } => {
            let position = resolve_position(&config, lat, lon)?;
            let catalog = match stations {
                Some(path) => load_stations(&path)?,
                None => builtin_stations()?,
            };
            if cli.verbose {
                eprintln!("{} stations in catalog", catalog.len());
            }

            let filtered = filter_stations(&catalog, ev, &query);
            let ranked = rank_stations(filtered, position, sort, fuel);
            output::output_stations(format, &ranked, position)
        }

        Commands::Journey { car, distance, profile, price, cars } => {
            let catalog = match cars {
                Some(path) => load_vehicles(&path)?,
                None => builtin_vehicles()?,
            };
            let vehicle = find_vehicle(&catalog, &car)?;
            if cli.verbose {
                eprintln!("Using {} ({})", vehicle.label(), vehicle.economy_label());
            }

            let mut planner = open_planner(&config)?;
            let estimate = planner.plan(vehicle, distance, profile, price)?;
            output::output_estimate(format, &estimate)
        }

        Commands::Recent => {
            let recents = open_recents(&config)?;
            output::output_vehicles(format, recents.vehicles())
        }

        Commands::Log { action } => execute_log(&config, format, action),

        Commands::Report { year, fuel, month } => {
            let year = year.unwrap_or_else(|| {
                use chrono::Datelike;
                Utc::now().year()
            });
            let ledger = open_ledger(&config)?;

            if let Some(month) = month {
                validate_month(month)?;
                let records = monthly_records(ledger.records(), year, month, fuel);
                return output::output_month(format, year, month, &records);
            }

            let totals = monthly_totals(ledger.records(), year, fuel);
            let summary = annual_summary(ledger.records(), year, fuel);
            output::output_report(format, year, &totals, &summary)
        }
    }
}

fn execute_log(config: &Config, format: OutputFormat, action: LogAction) -> Result<()> {
    let mut ledger = open_ledger(config)?;

    match action {
        LogAction::Add { station, fuel, price, total, date } => {
            let timestamp = match date {
                Some(text) => parse_date(&text)?,
                None => Utc::now(),
            };
            let record = ledger.add(ExpenseDraft {
                station,
                fuel_type: fuel,
                price_per_unit: price,
                total_cost: total,
                timestamp,
            })?;
            output::output_expense(format, &record)
        }

        LogAction::Update { id, station, fuel, price, total, date } => {
            let timestamp = match date {
                Some(text) => parse_date(&text)?,
                None => ledger
                    .records()
                    .iter()
                    .find(|r| r.id == id)
                    .ok_or(Error::RecordNotFound(id))?
                    .timestamp,
            };
            let record = ledger.update(
                id,
                ExpenseDraft {
                    station,
                    fuel_type: fuel,
                    price_per_unit: price,
                    total_cost: total,
                    timestamp,
                },
            )?;
            output::output_expense(format, &record)
        }

        LogAction::Remove { id } => {
            let record = ledger.remove_by_id(id)?;
            println!("Removed entry {} ({})", record.id, record.station);
            Ok(())
        }

        LogAction::Clear { year, month, fuel } => {
            validate_month(month)?;
            let removed = ledger.clear_month(year, month, fuel)?;
            let scope = match fuel {
                ExpenseFilter::All => String::new(),
                other => format!(" {other:?}"),
            };
            println!("Removed {removed}{scope} entries for {year}-{month:02}");
            Ok(())
        }
    }
}

fn resolve_position(config: &Config, lat: Option<f64>, lon: Option<f64>) -> Result<Coordinate> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)),
        (None, None) => match (config.home_latitude, config.home_longitude) {
            (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)),
            _ => Err(Error::InvalidInput(
                "no position: pass --lat/--lon or configure a home position".into(),
            )),
        },
        _ => Err(Error::InvalidInput(
            "--lat and --lon must be given together".into(),
        )),
    }
}

fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("month must be 1-12, got {month}")))
    }
}

fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| Error::InvalidInput(format!("invalid date '{text}', expected YYYY-MM-DD")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::InvalidInput(format!("invalid date '{text}'")))?;
    Ok(DateTime::from_naive_utc_and_offset(midnight, Utc))
}
