//! Domain model types

pub mod expense;
pub mod station;
pub mod vehicle;

pub use expense::{ExpenseDraft, ExpenseRecord};
pub use station::{RawStation, StationCategory, StationRecord};
pub use vehicle::Vehicle;
