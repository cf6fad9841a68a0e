//! Subcommand handlers.

use std::path::Path;

use anyhow::{Context, Result};
use calc_core::calculations::bmi::{self, BodyMeasurement};
use calc_core::calculations::emi::{self, LoanInput};
use calc_core::calculations::percentage;
use calc_core::catalog::{self, ToolCategory};
use calc_core::forms::PercentMode;
use calc_core::pdf_text::{PdfUpload, TextExport};
use calc_core::{Settings, UnitSystem};
use serde::Serialize;

use crate::cli::PercentCommand;
use crate::report;

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("serializing result")?);
    Ok(())
}

pub fn tools(category: Option<ToolCategory>) -> Result<()> {
    let listing = match category {
        Some(category) => report::tools(catalog::by_category(category)),
        None => report::tools(catalog::all_tools()),
    };
    print!("{}", listing);
    Ok(())
}

pub fn emi(
    settings: &Settings,
    principal: Option<f64>,
    rate: Option<f64>,
    years: Option<f64>,
    show_schedule: bool,
    json: bool,
) -> Result<()> {
    let input = LoanInput::new(
        principal.unwrap_or(settings.emi.principal),
        rate.unwrap_or(settings.emi.annual_rate_percent),
        years.unwrap_or(settings.emi.tenure_years),
    );
    let result = emi::calculate(&input)?;
    let schedule = if show_schedule {
        Some(emi::amortization_schedule(&input)?)
    } else {
        None
    };

    if json {
        #[derive(Serialize)]
        struct EmiOutput<'a> {
            input: &'a LoanInput,
            result: &'a emi::LoanResult,
            rounded: emi::RoundedLoanResult,
            #[serde(skip_serializing_if = "Option::is_none")]
            schedule: Option<&'a [emi::ScheduleRow]>,
        }
        return print_json(&EmiOutput {
            input: &input,
            result: &result,
            rounded: result.rounded(),
            schedule: schedule.as_deref(),
        });
    }

    print!("{}", report::emi(&input, &result));
    if let Some(rows) = schedule {
        println!();
        print!("{}", report::schedule(&rows));
    }
    Ok(())
}

pub fn bmi(
    settings: &Settings,
    weight: Option<f64>,
    height: Option<f64>,
    units: Option<UnitSystem>,
    json: bool,
) -> Result<()> {
    let unit_system = units.unwrap_or(settings.bmi.unit_system);
    let defaults = settings.bmi.measurement(unit_system);
    let input = BodyMeasurement::new(
        weight.unwrap_or(defaults.weight),
        height.unwrap_or(defaults.height),
        unit_system,
    );
    let result = bmi::calculate(&input)?;

    if json {
        #[derive(Serialize)]
        struct BmiOutput<'a> {
            input: &'a BodyMeasurement,
            bmi: f64,
            display_value: f64,
            category: &'static str,
        }
        return print_json(&BmiOutput {
            input: &input,
            bmi: result.bmi,
            display_value: result.display_value(),
            category: result.category.label(),
        });
    }

    print!("{}", report::bmi(&input, &result));
    Ok(())
}

pub fn percent(command: PercentCommand, json: bool) -> Result<()> {
    let query = match command {
        PercentCommand::Of { percent, value } => PercentMode::Of.query(percent, value),
        PercentCommand::What { part, whole } => PercentMode::What.query(part, whole),
        PercentCommand::Change { from, to } => PercentMode::Change.query(from, to),
    };
    let result = percentage::calculate(&query)?;

    if json {
        return print_json(&result);
    }
    print!("{}", report::percentage(&query, &result));
    Ok(())
}

pub fn pdf_to_text(settings: &Settings, file: &Path, out_dir: Option<&Path>) -> Result<()> {
    let upload = PdfUpload::from_path(file)?;
    let export = TextExport::from_upload(&upload);
    let dir = out_dir.unwrap_or(settings.export.output_dir.as_path());

    let saved = export.save(dir)?;
    tracing::info!(source = %file.display(), output = %saved.display(), "pdf converted");
    println!("Text extraction complete: {}", saved.display());
    Ok(())
}

pub fn default_config() -> Result<()> {
    print!("{}", Settings::default().to_toml_string()?);
    Ok(())
}
