//! # Everyday Tools CLI
//!
//! Terminal front end for the toolkit. Every tool is a subcommand; running
//! without one (or with `interactive`) opens the prompt-driven menu.
//!
//! ```text
//! calc emi --principal 500000 --rate 8.5 --years 20
//! calc bmi --weight 154 --height 67 --units imperial
//! calc percent change 80 100
//! calc pdf-to-text report.pdf --out-dir exports
//! ```

mod cli;
mod commands;
mod interactive;
mod logger;
mod report;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_core::{CalcError, Settings};
use clap::Parser;

use crate::cli::{Cli, Command};

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_or_default(cli.config.as_deref()).context("loading settings")?;
    tracing::debug!(?settings, "settings in effect");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Tools { category } => commands::tools(category),
        Command::Emi {
            principal,
            rate,
            years,
            schedule,
            json,
        } => commands::emi(&settings, principal, rate, years, schedule, json),
        Command::Bmi {
            weight,
            height,
            units,
            json,
        } => commands::bmi(&settings, weight, height, units, json),
        Command::Percent { query, json } => commands::percent(query, json),
        Command::PdfToText { file, out_dir } => commands::pdf_to_text(&settings, &file, out_dir.as_deref()),
        Command::Interactive => {
            let stdin = io::stdin();
            interactive::run(&mut stdin.lock(), &mut io::stdout(), &settings).context("interactive session")
        }
        Command::DefaultConfig => commands::default_config(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);

            if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                tracing::debug!(code = calc_error.error_code(), "command failed");
                if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
                if calc_error.is_input_error() {
                    return ExitCode::from(2);
                }
            }
            ExitCode::FAILURE
        }
    }
}
