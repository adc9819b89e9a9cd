//! Core value types shared across the workspace

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Powertrain of a catalog vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelKind {
    Petrol,
    Diesel,
    Electric,
}

impl FuelKind {
    pub fn is_electric(&self) -> bool {
        matches!(self, FuelKind::Electric)
    }
}

impl std::fmt::Display for FuelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelKind::Petrol => write!(f, "Petrol"),
            FuelKind::Diesel => write!(f, "Diesel"),
            FuelKind::Electric => write!(f, "Electric"),
        }
    }
}

/// Category of a logged expense. Electricity purchases are labelled "EV".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ExpenseFuel {
    Petrol,
    Diesel,
    #[serde(rename = "EV")]
    Ev,
}

impl ExpenseFuel {
    /// Unit the purchased quantity is measured in
    pub fn unit(&self) -> &'static str {
        match self {
            ExpenseFuel::Petrol | ExpenseFuel::Diesel => "L",
            ExpenseFuel::Ev => "kWh",
        }
    }
}

impl std::fmt::Display for ExpenseFuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseFuel::Petrol => write!(f, "Petrol"),
            ExpenseFuel::Diesel => write!(f, "Diesel"),
            ExpenseFuel::Ev => write!(f, "EV"),
        }
    }
}

/// Fuel-type filter applied to ledger queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ExpenseFilter {
    #[default]
    All,
    Petrol,
    Diesel,
    #[serde(rename = "EV")]
    Ev,
}

impl ExpenseFilter {
    pub fn matches(&self, fuel: ExpenseFuel) -> bool {
        match self {
            ExpenseFilter::All => true,
            ExpenseFilter::Petrol => fuel == ExpenseFuel::Petrol,
            ExpenseFilter::Diesel => fuel == ExpenseFuel::Diesel,
            ExpenseFilter::Ev => fuel == ExpenseFuel::Ev,
        }
    }
}

/// Fuel preference when ranking forecourt stations by price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelPreference {
    #[default]
    Petrol,
    Diesel,
}

/// Sort order for the nearby-stations list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Price,
}

/// Coarse adjustment applied to a vehicle's rated economy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum DrivingProfile {
    Urban,
    #[default]
    Mixed,
    Motorway,
}

impl DrivingProfile {
    /// Multiplier applied to a combustion vehicle's rated mpg
    pub fn mpg_factor(&self) -> f64 {
        match self {
            DrivingProfile::Urban => 0.85,
            DrivingProfile::Mixed => 1.0,
            DrivingProfile::Motorway => 1.15,
        }
    }
}

impl std::fmt::Display for DrivingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrivingProfile::Urban => write!(f, "Urban"),
            DrivingProfile::Mixed => write!(f, "Mixed"),
            DrivingProfile::Motorway => write!(f, "Motorway"),
        }
    }
}
