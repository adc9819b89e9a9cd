//! Store adapters for the persistence layer

use std::path::PathBuf;

use fuelwise_store::{FileKeyValueStore, LedgerStore, RecentVehicles};
use fuelwise_types::Result;

use crate::config::Config;
use crate::journey::JourneyPlanner;

/// Open the file-backed expense ledger
pub fn open_ledger(config: &Config) -> Result<LedgerStore<FileKeyValueStore>> {
    let store = FileKeyValueStore::open(config.store_dir()?)?;
    LedgerStore::load(store)
}

/// Open the file-backed recent-vehicles list
pub fn open_recents(config: &Config) -> Result<RecentVehicles<FileKeyValueStore>> {
    let store = FileKeyValueStore::open(config.store_dir()?)?;
    RecentVehicles::load(store)
}

/// Open a journey planner over the file-backed recent-vehicles list
pub fn open_planner(config: &Config) -> Result<JourneyPlanner<FileKeyValueStore>> {
    Ok(JourneyPlanner::new(open_recents(config)?))
}

/// Open the ledger at a custom directory
pub fn open_ledger_at(store_dir: PathBuf) -> Result<LedgerStore<FileKeyValueStore>> {
    LedgerStore::load(FileKeyValueStore::open(store_dir)?)
}
