//! # Menu Shared
//!
//! Configuration, telemetry, and small helpers shared by the menu crates.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
