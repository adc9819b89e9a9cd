//! Domain models and services for fuelwise
//!
//! Everything in this crate is pure computation over in-memory data:
//! filtering and ranking the station catalog, modelling journey costs for a
//! vehicle, and aggregating the expense ledger. Persistence lives in
//! `fuelwise-store`.

pub mod model;
pub mod service;
