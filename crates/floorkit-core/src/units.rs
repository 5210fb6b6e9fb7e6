//! Unit conversion utilities
//!
//! Plans are stored in meters. Lengths can be displayed in metric or
//! imperial (feet and inches) form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const METERS_PER_FOOT: f64 = 0.3048;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (m)
    #[default]
    Metric,
    /// Imperial system (ft/in)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "m" => Ok(Self::Metric),
            "imperial" | "ft" | "feet" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Converts meters to feet.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Format length value for display
///
/// * `meters` - Value in meters
/// * `system` - Target measurement system
///
/// Metric values are shown with two decimals (`3.25 m`), imperial values as
/// whole feet and inches rounded to the nearest inch (`10' 8"`).
pub fn format_length(meters: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.2} m", meters),
        MeasurementSystem::Imperial => {
            let total_inches = (meters_to_feet(meters) * 12.0).round();
            let sign = if total_inches < 0.0 { "-" } else { "" };
            let total_inches = total_inches.abs();
            let feet = (total_inches / 12.0).floor();
            let inches = total_inches - feet * 12.0;
            format!("{}{}' {}\"", sign, feet as i64, inches as i64)
        }
    }
}
