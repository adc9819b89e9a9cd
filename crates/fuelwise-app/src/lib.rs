//! Application service layer - config, catalogs, journey planning

pub mod catalog;
pub mod config;
pub mod journey;
pub mod repository;
