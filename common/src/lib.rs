// Common library shared by the Galac API binary and its tests

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod search;
pub mod telemetry;
