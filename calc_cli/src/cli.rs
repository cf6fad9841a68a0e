//! Command line definition.

use std::path::PathBuf;

use calc_core::catalog::ToolCategory;
use calc_core::UnitSystem;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "calc", version, about = "Everyday calculators: EMI, BMI, percentages and PDF to text")]
pub struct Cli {
    /// Settings file (TOML). Falls back to $CALC_CONFIG, then built-in defaults
    #[arg(long, global = true, env = "CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available tools
    Tools {
        /// Only show one category (finance, health, math, pdf)
        #[arg(long)]
        category: Option<ToolCategory>,
    },

    /// Equated monthly installment for a loan
    Emi {
        /// Loan amount
        #[arg(short, long)]
        principal: Option<f64>,

        /// Interest rate in percent per annum
        #[arg(short, long)]
        rate: Option<f64>,

        /// Loan tenure in years
        #[arg(short, long)]
        years: Option<f64>,

        /// Also print the month-by-month repayment schedule
        #[arg(long)]
        schedule: bool,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Body mass index and health category
    Bmi {
        /// Weight in kg (metric) or lbs (imperial)
        #[arg(short, long)]
        weight: Option<f64>,

        /// Height in cm (metric) or inches (imperial)
        #[arg(long)]
        height: Option<f64>,

        /// metric or imperial
        #[arg(short, long)]
        units: Option<UnitSystem>,

        #[arg(long)]
        json: bool,
    },

    /// Percentage questions
    Percent {
        #[command(subcommand)]
        query: PercentCommand,

        #[arg(long, global = true)]
        json: bool,
    },

    /// Validate a PDF and export its text to a .txt file
    PdfToText {
        /// PDF file to convert
        file: PathBuf,

        /// Directory for the .txt file (defaults to the settings' export dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Fill in the calculator forms interactively
    Interactive,

    /// Print the default settings as TOML
    DefaultConfig,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum PercentCommand {
    /// PERCENT % of VALUE
    Of {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// PART is what % of WHOLE
    What {
        #[arg(allow_negative_numbers = true)]
        part: f64,
        #[arg(allow_negative_numbers = true)]
        whole: f64,
    },
    /// % change from FROM to TO
    Change {
        #[arg(allow_negative_numbers = true)]
        from: f64,
        #[arg(allow_negative_numbers = true)]
        to: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_emi() {
        let cli = Cli::parse_from(["calc", "emi", "-p", "500000", "-r", "8.5", "-y", "20", "--json"]);
        match cli.command {
            Some(Command::Emi { principal, rate, years, json, .. }) => {
                assert_eq!(principal, Some(500000.0));
                assert_eq!(rate, Some(8.5));
                assert_eq!(years, Some(20.0));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bmi_units() {
        let cli = Cli::parse_from(["calc", "bmi", "-w", "154", "--height", "67", "-u", "imperial"]);
        match cli.command {
            Some(Command::Bmi { units, .. }) => assert_eq!(units, Some(UnitSystem::Imperial)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_percent_change_negative() {
        let cli = Cli::parse_from(["calc", "percent", "change", "-50", "-25"]);
        match cli.command {
            Some(Command::Percent { query: PercentCommand::Change { from, to }, .. }) => {
                assert_eq!(from, -50.0);
                assert_eq!(to, -25.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_percent_of_and_what_negative() {
        let cli = Cli::parse_from(["calc", "percent", "of", "-10", "200"]);
        match cli.command {
            Some(Command::Percent { query: PercentCommand::Of { percent, value }, .. }) => {
                assert_eq!(percent, -10.0);
                assert_eq!(value, 200.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["calc", "percent", "what", "-5", "-20"]);
        match cli.command {
            Some(Command::Percent { query: PercentCommand::What { part, whole }, .. }) => {
                assert_eq!(part, -5.0);
                assert_eq!(whole, -20.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
