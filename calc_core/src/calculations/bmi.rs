//! # BMI Calculation
//!
//! Body Mass Index from weight and height in either unit system.
//!
//! ## Formulas
//!
//! ```text
//! metric:   BMI = kg / (cm / 100)^2
//! imperial: BMI = (lbs / in^2) * 703
//! ```
//!
//! The category is decided on the unrounded BMI; the displayed value is
//! rounded to one decimal place.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bmi::{calculate, BmiCategory, BodyMeasurement};
//! use calc_core::units::UnitSystem;
//!
//! let result = calculate(&BodyMeasurement::new(70.0, 170.0, UnitSystem::Metric)).unwrap();
//! assert_eq!(result.display_value(), 24.2);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::parse::require_positive;
use crate::units::{Centimeters, Meters, UnitSystem};

/// Conversion factor for the imperial BMI formula (lb/in² to kg/m²)
pub const IMPERIAL_FACTOR: f64 = 703.0;

/// Input parameters for a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// { "weight": 154.0, "height": 67.0, "unit_system": "imperial" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// kg (metric) or lbs (imperial)
    pub weight: f64,

    /// cm (metric) or inches (imperial)
    pub height: f64,

    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BodyMeasurement {
    pub fn new(weight: f64, height: f64, unit_system: UnitSystem) -> Self {
        BodyMeasurement {
            weight,
            height,
            unit_system,
        }
    }

    /// Placeholder values shown in an empty form for each unit system.
    pub fn sample(unit_system: UnitSystem) -> Self {
        match unit_system {
            UnitSystem::Metric => BodyMeasurement::new(70.0, 170.0, unit_system),
            UnitSystem::Imperial => BodyMeasurement::new(154.0, 67.0, unit_system),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("weight", self.weight)?;
        require_positive("height", self.height)?;
        Ok(())
    }
}

/// Health category for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Classify a BMI value. Lower bounds are inclusive.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Range as printed in the reference table
    pub fn range_label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::NormalWeight => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => ">= 30",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Results from a BMI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Unrounded BMI in kg/m²
    pub bmi: f64,

    /// Category derived from the unrounded value
    pub category: BmiCategory,
}

impl BmiResult {
    /// BMI rounded to one decimal place
    pub fn display_value(&self) -> f64 {
        (self.bmi * 10.0).round() / 10.0
    }
}

/// Calculate BMI and its category.
///
/// # Returns
///
/// * `Ok(BmiResult)` - Calculation results
/// * `Err(CalcError)` - If weight or height is not a positive, finite number
pub fn calculate(input: &BodyMeasurement) -> CalcResult<BmiResult> {
    input.validate()?;

    let bmi = match input.unit_system {
        UnitSystem::Metric => {
            let height_m: Meters = Centimeters(input.height).into();
            input.weight / (height_m.0 * height_m.0)
        }
        UnitSystem::Imperial => input.weight / (input.height * input.height) * IMPERIAL_FACTOR,
    };

    let category = BmiCategory::from_bmi(bmi);
    tracing::debug!(bmi, %category, unit_system = %input.unit_system, "bmi calculated");

    Ok(BmiResult { bmi, category })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        let result = calculate(&BodyMeasurement::new(70.0, 170.0, UnitSystem::Metric)).unwrap();
        // 70 / 1.7^2 = 24.22
        assert!((result.bmi - 24.221).abs() < 0.001);
        assert_eq!(result.display_value(), 24.2);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_imperial_bmi() {
        let result = calculate(&BodyMeasurement::new(154.0, 67.0, UnitSystem::Imperial)).unwrap();
        // (154 / 67^2) * 703 = 24.12
        assert_eq!(result.display_value(), 24.1);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_category_uses_unrounded_value() {
        // 24.96 displays as 25.0 but is still below the Overweight bound
        let result = BmiResult {
            bmi: 24.96,
            category: BmiCategory::from_bmi(24.96),
        };
        assert_eq!(result.display_value(), 25.0);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(calculate(&BodyMeasurement::new(0.0, 170.0, UnitSystem::Metric)).is_err());
        assert!(calculate(&BodyMeasurement::new(70.0, -1.0, UnitSystem::Metric)).is_err());
        assert!(calculate(&BodyMeasurement::new(f64::NAN, 170.0, UnitSystem::Metric)).is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&BmiCategory::NormalWeight).unwrap();
        assert_eq!(json, "\"Normal weight\"");
    }

    #[test]
    fn test_unit_system_defaults_to_metric() {
        let input: BodyMeasurement = serde_json::from_str(r#"{"weight": 70, "height": 170}"#).unwrap();
        assert_eq!(input.unit_system, UnitSystem::Metric);
    }
}
