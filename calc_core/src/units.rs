//! # Unit Types
//!
//! The unit system a body measurement is entered in, plus the length
//! wrappers used by the metric BMI formula (f64 newtypes that serialize as
//! bare numbers).
//!
//! ## Unit Systems
//!
//! - **Metric**: weight in kilograms (kg), height in centimeters (cm)
//! - **Imperial**: weight in pounds (lbs), height in inches (in)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Centimeters, Meters, UnitSystem};
//!
//! let height = Centimeters(170.0);
//! let meters: Meters = height.into();
//! assert!((meters.0 - 1.7).abs() < 1e-12);
//!
//! assert_eq!(UnitSystem::Imperial.weight_unit(), "lbs");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system chosen for a BMI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Short label for the weight field
    pub fn weight_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Short label for the height field
    pub fn height_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "inches",
        }
    }

    /// Human-readable name, e.g. "Metric (kg, cm)"
    pub fn display_name(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (kg, cm)",
            UnitSystem::Imperial => "Imperial (lbs, inches)",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" | "kg" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "lbs" => Ok(UnitSystem::Imperial),
            other => Err(CalcError::unknown_option("unit_system", other, &["metric", "imperial"])),
        }
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}
