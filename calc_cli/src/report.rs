//! Plain-text reports for each tool.

use std::fmt::Write;

use calc_core::calculations::bmi::{BmiCategory, BmiResult, BodyMeasurement};
use calc_core::calculations::emi::{LoanInput, LoanResult, ScheduleRow};
use calc_core::calculations::percentage::{ChangeDirection, PercentageQuery, PercentageResult};
use calc_core::catalog::ToolInfo;
use calc_core::format::{format_bmi, format_inr, format_percent};

const RULE: &str = "═══════════════════════════════════════";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

pub fn emi(input: &LoanInput, result: &LoanResult) -> String {
    let shown = result.rounded();
    let mut out = String::new();

    banner(&mut out, "EMI BREAKDOWN");
    let _ = writeln!(out);
    let _ = writeln!(out, "Loan:");
    let _ = writeln!(out, "  Principal:      {}", format_inr(input.principal));
    let _ = writeln!(out, "  Interest rate:  {}% p.a.", input.annual_rate_percent);
    let _ = writeln!(out, "  Tenure:         {} years ({} installments)", input.tenure_years, result.installments);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Monthly EMI:          {}", format_inr(shown.monthly_installment));
    let _ = writeln!(out, "  Total interest:       {}", format_inr(shown.total_interest));
    let _ = writeln!(out, "  Total amount payable: {}", format_inr(shown.total_payable));
    let _ = writeln!(out, "{}", RULE);
    out
}

pub fn schedule(rows: &[ScheduleRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}", "Month", "Payment", "Principal", "Interest", "Balance");
    for row in rows {
        let _ = writeln!(
            out,
            "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}",
            row.month,
            format_inr(row.payment),
            format_inr(row.principal),
            format_inr(row.interest),
            format_inr(row.balance),
        );
    }
    out
}

pub fn bmi(input: &BodyMeasurement, result: &BmiResult) -> String {
    let mut out = String::new();

    banner(&mut out, "YOUR BMI");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Weight {} {}, height {} {}",
        input.weight,
        input.unit_system.weight_unit(),
        input.height,
        input.unit_system.height_unit()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  BMI:      {}", format_bmi(result.display_value()));
    let _ = writeln!(out, "  Category: {}", result.category);
    let _ = writeln!(out);
    for category in BmiCategory::ALL {
        let marker = if category == result.category { ">" } else { " " };
        let _ = writeln!(out, "  {} {:<14} {}", marker, category.label(), category.range_label());
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

pub fn percentage(query: &PercentageQuery, result: &PercentageResult) -> String {
    let answer = if result.is_percent {
        format_percent(result.value)
    } else {
        format!("{}", result.display_value())
    };

    match *query {
        PercentageQuery::PercentOf { percent, value } => {
            format!("{}% of {} = {}\n", percent, value, answer)
        }
        PercentageQuery::WhatPercent { part, whole } => {
            format!("{} is {} of {}\n", part, answer, whole)
        }
        PercentageQuery::PercentChange { from, to } => {
            let word = match result.direction {
                Some(ChangeDirection::Increase) => "increase",
                Some(ChangeDirection::Decrease) => "decrease",
                _ => "change",
            };
            let magnitude = format_percent(result.value.abs());
            format!("{} -> {}: {} {}\n", from, to, magnitude, word)
        }
    }
}

pub fn tools<'a>(tools: impl IntoIterator<Item = &'a ToolInfo>) -> String {
    let mut out = String::new();
    for tool in tools {
        let status = if tool.available { "" } else { " (coming soon)" };
        let _ = writeln!(out, "{:<24} [{}]{}", tool.title, tool.category, status);
        let _ = writeln!(out, "    {}", tool.description);
        let _ = writeln!(out, "    {}", tool.route());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{bmi as bmi_calc, emi as emi_calc, percentage as pct_calc};
    use calc_core::UnitSystem;

    #[test]
    fn test_emi_report() {
        let input = LoanInput::new(500_000.0, 8.5, 20.0);
        let result = emi_calc::calculate(&input).unwrap();
        let text = emi(&input, &result);
        assert!(text.contains("₹4,339"));
        assert!(text.contains("₹10,41,388"));
        assert!(text.contains("₹5,41,388"));
    }

    #[test]
    fn test_bmi_report_marks_category() {
        let input = BodyMeasurement::new(70.0, 170.0, UnitSystem::Metric);
        let result = bmi_calc::calculate(&input).unwrap();
        let text = bmi(&input, &result);
        assert!(text.contains("BMI:      24.2"));
        assert!(text.contains("> Normal weight"));
    }

    #[test]
    fn test_percentage_report() {
        let query = PercentageQuery::PercentChange { from: 100.0, to: 80.0 };
        let result = pct_calc::calculate(&query).unwrap();
        assert_eq!(percentage(&query, &result), "100 -> 80: 20% decrease\n");

        let query = PercentageQuery::PercentOf { percent: 15.0, value: 2400.0 };
        let result = pct_calc::calculate(&query).unwrap();
        assert_eq!(percentage(&query, &result), "15% of 2400 = 360\n");
    }

    #[test]
    fn test_tools_listing() {
        let text = tools(calc_core::catalog::all_tools());
        assert!(text.contains("PDF Merger"));
        assert!(text.contains("(coming soon)"));
        assert!(text.contains("/emi-calculator"));
    }
}
