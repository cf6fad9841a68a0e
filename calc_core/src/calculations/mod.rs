//! # Calculators
//!
//! Each calculator follows the pattern:
//!
//! - `*Input` / `*Query` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`emi`] - Equated monthly installment for a loan
//! - [`bmi`] - Body mass index and health category
//! - [`percentage`] - Percent-of, what-percent and percent change

pub mod bmi;
pub mod emi;
pub mod percentage;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use bmi::{BmiCategory, BmiResult, BodyMeasurement};
pub use emi::{LoanInput, LoanResult, RoundedLoanResult};
pub use percentage::{PercentageQuery, PercentageResult};

/// Enum wrapper for all calculation inputs.
///
/// Lets a caller hand over any calculation as one JSON document:
///
/// ```json
/// { "type": "Emi", "principal": 500000.0, "annual_rate_percent": 8.5, "tenure_years": 20.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Calculation {
    Emi(LoanInput),
    Bmi(BodyMeasurement),
    Percentage(PercentageQuery),
}

/// Result of a [`Calculation`], tagged the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Emi(LoanResult),
    Bmi(BmiResult),
    Percentage(PercentageResult),
}

impl Calculation {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            Calculation::Emi(_) => "EMI",
            Calculation::Bmi(_) => "BMI",
            Calculation::Percentage(_) => "Percentage",
        }
    }

    /// Run the matching calculator.
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        match self {
            Calculation::Emi(input) => emi::calculate(input).map(CalculationOutput::Emi),
            Calculation::Bmi(input) => bmi::calculate(input).map(CalculationOutput::Bmi),
            Calculation::Percentage(query) => percentage::calculate(query).map(CalculationOutput::Percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_from_json() {
        let json = r#"{"type":"Bmi","weight":70.0,"height":170.0,"unit_system":"metric"}"#;
        let calc: Calculation = serde_json::from_str(json).unwrap();
        assert_eq!(calc.calc_type(), "BMI");

        match calc.run().unwrap() {
            CalculationOutput::Bmi(result) => assert_eq!(result.category, BmiCategory::NormalWeight),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let calc = Calculation::Emi(LoanInput::new(-1.0, 8.5, 20.0));
        assert_eq!(calc.run().unwrap_err().error_code(), "NON_POSITIVE_VALUE");
    }
}
