//! Prompt-driven mode: a menu of tools, each backed by its form.
//!
//! Pressing enter at a prompt keeps the value already in the field, so the
//! forms start out with the configured defaults just like the web pages.

use std::io::{self, BufRead, Write};

use calc_core::catalog;
use calc_core::format::{format_bmi, format_inr, format_percent};
use calc_core::forms::{BmiForm, EmiForm, FormStatus, PercentMode, PercentageForm};
use calc_core::pdf_text::{PdfUpload, TextExport};
use calc_core::{CalcError, Settings, UnitSystem};

/// Read one line after showing `prompt`. `None` means end of input.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a field, keeping `current` when the answer is blank.
fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current: &mut String,
) -> io::Result<bool> {
    match prompt_line(input, out, &format!("{} [{}]: ", label, current))? {
        Some(answer) => {
            if !answer.is_empty() {
                *current = answer;
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

fn show_rejection<W: Write>(out: &mut W, error: Option<&CalcError>, has_previous: bool) -> io::Result<()> {
    if let Some(error) = error {
        writeln!(out, "  ! {}", error)?;
    }
    if has_previous {
        writeln!(out, "  (showing previous result)")?;
    }
    Ok(())
}

/// Run the menu until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, settings: &Settings) -> io::Result<()> {
    let mut emi = EmiForm::new(settings.emi);
    let mut bmi = BmiForm::new(settings.bmi);
    let mut percent = PercentageForm::new(PercentMode::Of);

    writeln!(out, "Everyday Tools")?;
    writeln!(out, "==============")?;

    loop {
        writeln!(out)?;
        for (i, tool) in catalog::all_tools().iter().enumerate() {
            let status = if tool.available { "" } else { " (coming soon)" };
            writeln!(out, "  {}. {}{}", i + 1, tool.title, status)?;
        }
        writeln!(out, "  q. Quit")?;

        let choice = match prompt_line(input, out, "Choose a tool: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        let keep_going = match choice.as_str() {
            "1" => emi_screen(input, out, &mut emi)?,
            "2" => bmi_screen(input, out, &mut bmi)?,
            "3" => percent_screen(input, out, &mut percent)?,
            "4" => pdf_screen(input, out, settings)?,
            "5" => {
                writeln!(out, "PDF Merger is not available yet.")?;
                true
            }
            "q" | "Q" | "quit" | "exit" => return Ok(()),
            other => {
                writeln!(out, "Unknown choice '{}'", other)?;
                true
            }
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn emi_screen<R: BufRead, W: Write>(input: &mut R, out: &mut W, form: &mut EmiForm) -> io::Result<bool> {
    writeln!(out, "\nEMI Calculator")?;
    if !prompt_field(input, out, "Loan amount (₹)", &mut form.principal)?
        || !prompt_field(input, out, "Interest rate (% per annum)", &mut form.annual_rate_percent)?
        || !prompt_field(input, out, "Loan tenure (years)", &mut form.tenure_years)?
    {
        return Ok(false);
    }

    let status = form.submit();
    if status == FormStatus::Rejected {
        show_rejection(out, form.last_error(), form.result().is_some())?;
    }
    if let Some(result) = form.result() {
        let shown = result.rounded();
        writeln!(out, "  Monthly EMI:          {}", format_inr(shown.monthly_installment))?;
        writeln!(out, "  Total interest:       {}", format_inr(shown.total_interest))?;
        writeln!(out, "  Total amount payable: {}", format_inr(shown.total_payable))?;
    }
    Ok(true)
}

fn bmi_screen<R: BufRead, W: Write>(input: &mut R, out: &mut W, form: &mut BmiForm) -> io::Result<bool> {
    writeln!(out, "\nBMI Calculator")?;

    let mut units = form.unit_system().to_string();
    if !prompt_field(input, out, "Unit system (metric/imperial)", &mut units)? {
        return Ok(false);
    }
    match units.parse::<UnitSystem>() {
        Ok(unit_system) => form.set_unit_system(unit_system),
        Err(e) => writeln!(out, "  ! {} - keeping {}", e, form.unit_system())?,
    }

    let unit_system = form.unit_system();
    let weight_label = format!("Weight ({})", unit_system.weight_unit());
    let height_label = format!("Height ({})", unit_system.height_unit());
    if !prompt_field(input, out, &weight_label, &mut form.weight)?
        || !prompt_field(input, out, &height_label, &mut form.height)?
    {
        return Ok(false);
    }

    if form.submit() == FormStatus::Rejected {
        show_rejection(out, form.last_error(), form.result().is_some())?;
    }
    if let Some(result) = form.result() {
        writeln!(out, "  Your BMI: {} ({})", format_bmi(result.display_value()), result.category)?;
    }
    Ok(true)
}

fn percent_screen<R: BufRead, W: Write>(input: &mut R, out: &mut W, form: &mut PercentageForm) -> io::Result<bool> {
    writeln!(out, "\nPercentage Calculator")?;

    let mut mode = form.mode.to_string();
    if !prompt_field(input, out, "Question (of/what/change)", &mut mode)? {
        return Ok(false);
    }
    match mode.parse::<PercentMode>() {
        Ok(mode) => form.mode = mode,
        Err(e) => writeln!(out, "  ! {} - keeping '{}'", e, form.mode)?,
    }

    let (first, second) = form.mode.field_labels();
    if !prompt_field(input, out, first, &mut form.first)? || !prompt_field(input, out, second, &mut form.second)? {
        return Ok(false);
    }

    if form.submit() == FormStatus::Rejected {
        show_rejection(out, form.last_error(), form.result().is_some())?;
    }
    if let Some(result) = form.result() {
        let answer = if result.is_percent {
            format_percent(result.value)
        } else {
            result.display_value().to_string()
        };
        writeln!(out, "  Result: {}", answer)?;
    }
    Ok(true)
}

fn pdf_screen<R: BufRead, W: Write>(input: &mut R, out: &mut W, settings: &Settings) -> io::Result<bool> {
    writeln!(out, "\nPDF to Text")?;
    let path = match prompt_line(input, out, "PDF file: ")? {
        Some(path) if !path.is_empty() => path,
        Some(_) => return Ok(true),
        None => return Ok(false),
    };

    let saved = PdfUpload::from_path(std::path::Path::new(&path))
        .and_then(|upload| TextExport::from_upload(&upload).save(&settings.export.output_dir));
    match saved {
        Ok(saved) => writeln!(out, "  Text extraction complete: {}", saved.display())?,
        Err(e) => writeln!(out, "  ! {}", e)?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run(&mut input, &mut out, &Settings::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_emi_with_defaults() {
        let out = session("1\n\n\n\nq\n");
        assert!(out.contains("Monthly EMI:          ₹4,339"));
    }

    #[test]
    fn test_bad_input_keeps_previous_result() {
        let out = session("1\n\n\n\n1\n\nabc\n\nq\n");
        assert!(out.contains("Invalid number for 'annual_rate_percent'"));
        assert!(out.contains("(showing previous result)"));
        assert_eq!(out.matches("₹4,339").count(), 2);
    }

    #[test]
    fn test_bmi_imperial() {
        let out = session("2\nimperial\n154\n67\nq\n");
        assert!(out.contains("Your BMI: 24.1 (Normal weight)"));
    }

    #[test]
    fn test_percent_change() {
        let out = session("3\nchange\n80\n100\n");
        assert!(out.contains("Result: 25%"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = session("");
        assert!(out.contains("Choose a tool"));
    }
}
