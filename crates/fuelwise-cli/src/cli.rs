//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fuelwise_types::{DrivingProfile, ExpenseFilter, ExpenseFuel, FuelPreference, OutputFormat, SortKey};

#[derive(Parser)]
#[command(name = "fuelwise")]
#[command(author = "andrei")]
#[command(version)]
#[command(about = "Find cheap fuel or charging, estimate journey costs, track driving spend")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Directory for the persisted ledger and recent vehicles
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List nearby stations ranked by distance or price
    Nearby {
        /// Your latitude. Falls back to the configured home position.
        #[arg(long)]
        lat: Option<f64>,

        /// Your longitude. Falls back to the configured home position.
        #[arg(long)]
        lon: Option<f64>,

        /// Show EV charge points instead of fuel forecourts
        #[arg(long)]
        ev: bool,

        /// Search by name or location
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Sort order
        #[arg(long, short = 's', default_value_t, value_enum)]
        sort: SortKey,

        /// Fuel preference for price ranking (ignored with --ev)
        #[arg(long, default_value_t, value_enum)]
        fuel: FuelPreference,

        /// Custom station catalog (JSON)
        #[arg(long)]
        stations: Option<PathBuf>,
    },

    /// Estimate the cost of a journey for a catalog car
    Journey {
        /// Car to use, e.g. "golf" or "Tesla Model 3"
        #[arg(long, short = 'c')]
        car: String,

        /// Journey distance in miles
        #[arg(long, short = 'd')]
        distance: f64,

        /// Driving profile
        #[arg(long, short = 'p', default_value_t, value_enum)]
        profile: DrivingProfile,

        /// Price per litre (or per kWh). Defaults to a typical price for
        /// the car's fuel.
        #[arg(long)]
        price: Option<f64>,

        /// Custom car catalog (JSON)
        #[arg(long)]
        cars: Option<PathBuf>,
    },

    /// Show recently used cars
    Recent,

    /// Manage the expense ledger
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Monthly totals and annual summary for a year
    Report {
        /// Year to report on (defaults to the current year)
        #[arg(long, short = 'y')]
        year: Option<i32>,

        /// Restrict to one fuel type
        #[arg(long, default_value_t, value_enum)]
        fuel: ExpenseFilter,

        /// Drill into one month's entries (1-12)
        #[arg(long, short = 'm')]
        month: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Save a refuelling/charging expense
    Add {
        /// Station name
        #[arg(long, short = 's')]
        station: String,

        /// What was purchased
        #[arg(long, value_enum)]
        fuel: ExpenseFuel,

        /// Price per litre (or per kWh for EV)
        #[arg(long, short = 'p')]
        price: f64,

        /// Total cost of the purchase
        #[arg(long, short = 't')]
        total: f64,

        /// Date of fueling (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Replace the fields of an existing entry
    Update {
        /// Id of the entry to update
        id: i64,

        #[arg(long, short = 's')]
        station: String,

        #[arg(long, value_enum)]
        fuel: ExpenseFuel,

        #[arg(long, short = 'p')]
        price: f64,

        #[arg(long, short = 't')]
        total: f64,

        /// New date (YYYY-MM-DD). Keeps the entry's date if omitted.
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a single entry
    Remove {
        /// Id of the entry to delete
        id: i64,
    },

    /// Delete all entries for a month
    Clear {
        #[arg(long, short = 'y')]
        year: i32,

        /// Month 1-12
        #[arg(long, short = 'm')]
        month: u32,

        /// Only entries of this fuel type
        #[arg(long, default_value_t, value_enum)]
        fuel: ExpenseFilter,
    },
}
