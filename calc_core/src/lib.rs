//! # calc_core - Everyday Calculator Engine
//!
//! `calc_core` holds the logic behind the toolkit's tools: loan EMI, body
//! mass index, percentages and the PDF-to-text export. All inputs and
//! outputs are JSON-serializable, so any front end (CLI, web, GUI) can
//! drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Checked input**: Text is parsed into numbers up front; NaN never
//!   reaches a formula
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::emi::{calculate, LoanInput};
//! use calc_core::format::format_inr;
//!
//! let result = calculate(&LoanInput::new(500_000.0, 8.5, 20.0)).unwrap();
//! assert_eq!(format_inr(result.monthly_installment), "₹4,339");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - EMI, BMI and percentage calculators
//! - [`forms`] - Per-view form state that keeps the last good result
//! - [`pdf_text`] - PDF upload validation and text export
//! - [`catalog`] - The list of available tools
//! - [`format`] - Currency and number display
//! - [`settings`] - TOML-backed defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`parse`] - Text to number parsing
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod format;
pub mod forms;
pub mod parse;
pub mod pdf_text;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Calculation, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use settings::Settings;
pub use units::UnitSystem;
