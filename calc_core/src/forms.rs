//! # Form State
//!
//! Transient, view-scoped state for each calculator: the raw text the user
//! typed, the last successful result and the last rejection.
//!
//! Submitting a form parses every field and runs the calculator. A
//! rejected submission never clears what is on screen: the previous
//! result stays and the error is recorded next to it. Editing a field
//! does not clear the result either; only [`reset`](EmiForm::reset)
//! (leaving the view) discards it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::forms::{EmiForm, FormStatus};
//! use calc_core::settings::EmiDefaults;
//!
//! let mut form = EmiForm::new(EmiDefaults::default());
//! assert_eq!(form.submit(), FormStatus::Calculated);
//! let emi = form.result().unwrap().rounded().monthly_installment;
//!
//! form.tenure_years = "0".to_string();
//! assert_eq!(form.submit(), FormStatus::Rejected);
//! assert_eq!(form.result().unwrap().rounded().monthly_installment, emi);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::bmi::{self, BmiResult, BodyMeasurement};
use crate::calculations::emi::{self, LoanInput, LoanResult};
use crate::calculations::percentage::{self, PercentageQuery, PercentageResult};
use crate::errors::{CalcError, CalcResult};
use crate::parse::parse_number;
use crate::settings::{BmiDefaults, EmiDefaults};
use crate::units::UnitSystem;

/// What a submission did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// A new result replaced the old one
    Calculated,
    /// Input was rejected; the previous result (if any) is unchanged
    Rejected,
}

/// Result/error pair shared by every form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R> {
    result: Option<R>,
    last_error: Option<CalcError>,
}

impl<R> Default for FormState<R> {
    fn default() -> Self {
        FormState {
            result: None,
            last_error: None,
        }
    }
}

impl<R> FormState<R> {
    fn apply(&mut self, form: &'static str, outcome: CalcResult<R>) -> FormStatus {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.last_error = None;
                FormStatus::Calculated
            }
            Err(err) => {
                tracing::warn!(form, error = %err, code = err.error_code(), "submission rejected, keeping previous result");
                self.last_error = Some(err);
                FormStatus::Rejected
            }
        }
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }
}

/// Text shown in a field for a default value (`500000`, `8.5`).
fn field_text(value: f64) -> String {
    value.to_string()
}

// ============================================================================
// EMI
// ============================================================================

/// EMI calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct EmiForm {
    pub principal: String,
    pub annual_rate_percent: String,
    pub tenure_years: String,
    defaults: EmiDefaults,
    state: FormState<LoanResult>,
}

impl EmiForm {
    pub fn new(defaults: EmiDefaults) -> Self {
        EmiForm {
            principal: field_text(defaults.principal),
            annual_rate_percent: field_text(defaults.annual_rate_percent),
            tenure_years: field_text(defaults.tenure_years),
            defaults,
            state: FormState::default(),
        }
    }

    /// Parse the fields into a typed input.
    pub fn input(&self) -> CalcResult<LoanInput> {
        Ok(LoanInput::new(
            parse_number("principal", &self.principal)?,
            parse_number("annual_rate_percent", &self.annual_rate_percent)?,
            parse_number("tenure_years", &self.tenure_years)?,
        ))
    }

    pub fn submit(&mut self) -> FormStatus {
        let outcome = self.input().and_then(|input| emi::calculate(&input));
        self.state.apply("emi", outcome)
    }

    pub fn result(&self) -> Option<&LoanResult> {
        self.state.result()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.state.last_error()
    }

    /// Back to the default values with nothing calculated.
    pub fn reset(&mut self) {
        *self = EmiForm::new(self.defaults);
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiForm {
    pub weight: String,
    pub height: String,
    unit_system: UnitSystem,
    defaults: BmiDefaults,
    state: FormState<BmiResult>,
}

impl BmiForm {
    pub fn new(defaults: BmiDefaults) -> Self {
        let start = defaults.measurement(defaults.unit_system);
        BmiForm {
            weight: field_text(start.weight),
            height: field_text(start.height),
            unit_system: defaults.unit_system,
            defaults,
            state: FormState::default(),
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Switch unit system. Typed values and the shown result are kept.
    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
    }

    /// Example values for the empty fields in the current unit system
    pub fn placeholder(&self) -> BodyMeasurement {
        self.defaults.measurement(self.unit_system)
    }

    pub fn input(&self) -> CalcResult<BodyMeasurement> {
        Ok(BodyMeasurement::new(
            parse_number("weight", &self.weight)?,
            parse_number("height", &self.height)?,
            self.unit_system,
        ))
    }

    pub fn submit(&mut self) -> FormStatus {
        let outcome = self.input().and_then(|input| bmi::calculate(&input));
        self.state.apply("bmi", outcome)
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.state.result()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.state.last_error()
    }

    pub fn reset(&mut self) {
        *self = BmiForm::new(self.defaults);
    }
}

// ============================================================================
// Percentage
// ============================================================================

/// Which percentage question the form asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentMode {
    /// X% of Y
    #[default]
    Of,
    /// X is what % of Y
    What,
    /// % change from X to Y
    Change,
}

impl PercentMode {
    pub const ALL: [PercentMode; 3] = [PercentMode::Of, PercentMode::What, PercentMode::Change];

    /// Labels for the two input fields
    pub fn field_labels(self) -> (&'static str, &'static str) {
        match self {
            PercentMode::Of => ("percent", "value"),
            PercentMode::What => ("part", "whole"),
            PercentMode::Change => ("from", "to"),
        }
    }

    /// Build the query for two parsed numbers.
    pub fn query(self, first: f64, second: f64) -> PercentageQuery {
        match self {
            PercentMode::Of => PercentageQuery::PercentOf {
                percent: first,
                value: second,
            },
            PercentMode::What => PercentageQuery::WhatPercent {
                part: first,
                whole: second,
            },
            PercentMode::Change => PercentageQuery::PercentChange { from: first, to: second },
        }
    }
}

impl fmt::Display for PercentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentMode::Of => write!(f, "of"),
            PercentMode::What => write!(f, "what"),
            PercentMode::Change => write!(f, "change"),
        }
    }
}

impl FromStr for PercentMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "of" => Ok(PercentMode::Of),
            "what" => Ok(PercentMode::What),
            "change" => Ok(PercentMode::Change),
            other => Err(CalcError::unknown_option("mode", other, &["of", "what", "change"])),
        }
    }
}

/// Percentage calculator form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PercentageForm {
    pub mode: PercentMode,
    pub first: String,
    pub second: String,
    state: FormState<PercentageResult>,
}

impl PercentageForm {
    pub fn new(mode: PercentMode) -> Self {
        PercentageForm {
            mode,
            ..PercentageForm::default()
        }
    }

    pub fn input(&self) -> CalcResult<PercentageQuery> {
        let (first_label, second_label) = self.mode.field_labels();
        Ok(self.mode.query(
            parse_number(first_label, &self.first)?,
            parse_number(second_label, &self.second)?,
        ))
    }

    pub fn submit(&mut self) -> FormStatus {
        let outcome = self.input().and_then(|query| percentage::calculate(&query));
        self.state.apply("percentage", outcome)
    }

    pub fn result(&self) -> Option<&PercentageResult> {
        self.state.result()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.state.last_error()
    }

    pub fn reset(&mut self) {
        *self = PercentageForm::new(self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bmi::BmiCategory;

    #[test]
    fn test_emi_form_defaults() {
        let form = EmiForm::new(EmiDefaults::default());
        assert_eq!(form.principal, "500000");
        assert_eq!(form.annual_rate_percent, "8.5");
        assert_eq!(form.tenure_years, "20");
        assert!(form.result().is_none());
    }

    #[test]
    fn test_emi_form_keeps_result_on_bad_input() {
        let mut form = EmiForm::new(EmiDefaults::default());
        assert_eq!(form.submit(), FormStatus::Calculated);
        let first = *form.result().unwrap();

        form.annual_rate_percent = "abc".to_string();
        assert_eq!(form.submit(), FormStatus::Rejected);
        assert_eq!(form.result(), Some(&first));
        assert_eq!(form.last_error().unwrap().field(), Some("annual_rate_percent"));

        form.annual_rate_percent = "9".to_string();
        assert_eq!(form.submit(), FormStatus::Calculated);
        assert!(form.last_error().is_none());
        assert!(form.result().unwrap().monthly_installment > first.monthly_installment);
    }

    #[test]
    fn test_rejected_first_submission_has_no_result() {
        let mut form = EmiForm::new(EmiDefaults::default());
        form.principal = String::new();
        assert_eq!(form.submit(), FormStatus::Rejected);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_emi_form_reset() {
        let mut form = EmiForm::new(EmiDefaults::default());
        form.principal = "1000".to_string();
        form.submit();
        form.reset();
        assert_eq!(form.principal, "500000");
        assert!(form.result().is_none());
    }

    #[test]
    fn test_bmi_form_unit_switch_keeps_values() {
        let mut form = BmiForm::new(BmiDefaults::default());
        assert_eq!(form.submit(), FormStatus::Calculated);
        assert_eq!(form.result().unwrap().category, BmiCategory::NormalWeight);

        form.set_unit_system(UnitSystem::Imperial);
        assert_eq!(form.weight, "70");
        assert_eq!(form.placeholder().height, 67.0);
        assert!(form.result().is_some());

        form.weight = "154".to_string();
        form.height = "67".to_string();
        form.submit();
        assert_eq!(form.result().unwrap().display_value(), 24.1);
    }

    #[test]
    fn test_percentage_form() {
        let mut form = PercentageForm::new(PercentMode::What);
        form.first = "45".to_string();
        form.second = "180".to_string();
        assert_eq!(form.submit(), FormStatus::Calculated);
        assert_eq!(form.result().unwrap().value, 25.0);

        form.second = "0".to_string();
        assert_eq!(form.submit(), FormStatus::Rejected);
        assert_eq!(form.last_error().unwrap().error_code(), "DIVISION_BY_ZERO");
        assert_eq!(form.result().unwrap().value, 25.0);
    }

    #[test]
    fn test_percent_mode_parsing() {
        assert_eq!("Change".parse::<PercentMode>().unwrap(), PercentMode::Change);
        assert!("ratio".parse::<PercentMode>().is_err());
    }
}
