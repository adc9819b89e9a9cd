//! FuelWise - nearby fuel and charging, journey costs, spending logs
//!
//! A CLI front on the fuelwise core: ranks the station catalog around a
//! position, estimates journey costs for a catalog vehicle, and keeps the
//! refuelling ledger.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
