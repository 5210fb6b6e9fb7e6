//! # FloorKit Core
//!
//! Core types shared by the FloorKit crates:
//! - Error types for plan editing and document handling
//! - Editor constants (pick/attach thresholds, defaults)
//! - Measurement units and length formatting

pub mod constants;
pub mod error;
pub mod units;

pub use error::{PlanError, Result};
pub use units::{format_length, MeasurementSystem};
