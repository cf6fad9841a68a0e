//! Integration tests for the calculators, driven through the public API.

use calc_core::calculations::bmi::{self, BmiCategory, BodyMeasurement};
use calc_core::calculations::emi::{self, LoanInput};
use calc_core::calculations::{Calculation, CalculationOutput};
use calc_core::format::{format_bmi, format_inr};
use calc_core::UnitSystem;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(500_000.0, 8.5, 20.0, 4_339.0, 1_041_388.0, 541_388.0)]
#[case(1_000_000.0, 10.0, 10.0, 13_215.0, 1_585_809.0, 585_809.0)]
#[case(120_000.0, 0.0, 10.0, 1_000.0, 120_000.0, 0.0)]
#[case(120_000.0, 1e-15, 10.0, 1_000.0, 120_000.0, 0.0)]
#[case(500_000.0, 8.5, 10_000.0, 3_542.0, 425_000_000.0, 424_500_000.0)]
fn emi_rounded_figures(
    #[case] principal: f64,
    #[case] rate: f64,
    #[case] years: f64,
    #[case] emi_expected: f64,
    #[case] total_expected: f64,
    #[case] interest_expected: f64,
) {
    let shown = emi::calculate(&LoanInput::new(principal, rate, years)).unwrap().rounded();
    assert_eq!(shown.monthly_installment, emi_expected);
    assert_eq!(shown.total_payable, total_expected);
    assert_eq!(shown.total_interest, interest_expected);
}

#[rstest]
#[case(0.0, 8.5, 20.0, "NON_POSITIVE_VALUE")]
#[case(-10.0, 8.5, 20.0, "NON_POSITIVE_VALUE")]
#[case(500_000.0, -0.5, 20.0, "NEGATIVE_VALUE")]
#[case(500_000.0, 8.5, 0.0, "NON_POSITIVE_VALUE")]
#[case(500_000.0, f64::NAN, 20.0, "INVALID_NUMBER")]
#[case(f64::INFINITY, 8.5, 20.0, "INVALID_NUMBER")]
#[case(1e308, 1200.0, 1.0, "RESULT_OVERFLOW")]
fn emi_rejects_bad_input(#[case] principal: f64, #[case] rate: f64, #[case] years: f64, #[case] code: &str) {
    let err = emi::calculate(&LoanInput::new(principal, rate, years)).unwrap_err();
    assert_eq!(err.error_code(), code);
}

#[rstest]
// Heights of 100 cm make BMI equal to the weight, hitting bounds exactly
#[case(18.4, 100.0, UnitSystem::Metric, BmiCategory::Underweight)]
#[case(18.5, 100.0, UnitSystem::Metric, BmiCategory::NormalWeight)]
#[case(25.0, 100.0, UnitSystem::Metric, BmiCategory::Overweight)]
#[case(30.0, 100.0, UnitSystem::Metric, BmiCategory::Obese)]
#[case(70.0, 170.0, UnitSystem::Metric, BmiCategory::NormalWeight)]
#[case(154.0, 67.0, UnitSystem::Imperial, BmiCategory::NormalWeight)]
#[case(250.0, 65.0, UnitSystem::Imperial, BmiCategory::Obese)]
fn bmi_categories(
    #[case] weight: f64,
    #[case] height: f64,
    #[case] units: UnitSystem,
    #[case] expected: BmiCategory,
) {
    let result = bmi::calculate(&BodyMeasurement::new(weight, height, units)).unwrap();
    assert_eq!(result.category, expected);
}

#[test]
fn bmi_display_values() {
    let metric = bmi::calculate(&BodyMeasurement::new(70.0, 170.0, UnitSystem::Metric)).unwrap();
    assert_eq!(format_bmi(metric.display_value()), "24.2");

    let imperial = bmi::calculate(&BodyMeasurement::new(154.0, 67.0, UnitSystem::Imperial)).unwrap();
    assert_eq!(format_bmi(imperial.display_value()), "24.1");
}

#[test]
fn same_imperial_and_metric_body_agree() {
    // 154 lbs / 67 in is about 69.85 kg / 170.18 cm; the 703 factor is a rounded constant
    let imperial = bmi::calculate(&BodyMeasurement::new(154.0, 67.0, UnitSystem::Imperial)).unwrap();
    let metric = bmi::calculate(&BodyMeasurement::new(69.853, 170.18, UnitSystem::Metric)).unwrap();
    assert!((imperial.bmi - metric.bmi).abs() < 0.05);
}

#[test]
fn calculations_are_idempotent() {
    let calcs = [
        Calculation::Emi(LoanInput::new(500_000.0, 8.5, 20.0)),
        Calculation::Bmi(BodyMeasurement::new(70.0, 170.0, UnitSystem::Metric)),
    ];
    for calc in calcs {
        assert_eq!(calc.run().unwrap(), calc.run().unwrap());
    }
}

#[test]
fn emi_result_formats_as_rupees() {
    let result = emi::calculate(&LoanInput::new(500_000.0, 8.5, 20.0)).unwrap();
    assert_eq!(format_inr(result.monthly_installment), "₹4,339");
    assert_eq!(format_inr(result.total_payable), "₹10,41,388");
    assert_eq!(format_inr(result.total_interest), "₹5,41,388");
}

#[test]
fn calculation_output_json_is_tagged() {
    let output = Calculation::Emi(LoanInput::new(120_000.0, 0.0, 10.0)).run().unwrap();
    let json = serde_json::to_value(output).unwrap();
    assert_eq!(json["type"], "Emi");
    assert_eq!(json["monthly_installment"], 1000.0);

    let roundtrip: CalculationOutput = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip, output);
}
