//! Persistence layer for fuelwise
//!
//! The external storage collaborator is a plain key-value store of
//! serialized strings. Stores in this crate keep their working state in
//! memory and write the whole collection back after every mutation; volumes
//! are personal-scale, so read-modify-write is the contract.

pub mod kv;
pub mod ledger;
pub mod recents;

pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use ledger::LedgerStore;
pub use recents::RecentVehicles;
