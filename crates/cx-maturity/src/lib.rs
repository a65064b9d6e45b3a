pub mod config;
pub mod error;
pub mod quiz;
pub mod submission;
pub mod telemetry;
