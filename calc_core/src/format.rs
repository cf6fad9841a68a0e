//! # Display Formatting
//!
//! Turns calculator results into display strings. Currency amounts are
//! shown in Indian rupees with en-IN digit grouping and no fraction digits
//! (`₹10,41,388`), matching how loan figures are quoted in India.
//!
//! Digit grouping comes from ICU4X compiled locale data rather than a
//! hand-written lakh/crore rule.

use fixed_decimal::FixedDecimal;
use icu::decimal::{options::FixedDecimalFormatterOptions, FixedDecimalFormatter};
use icu::locid::locale;
use writeable::Writeable;

/// Currency symbol prefixed to every amount
pub const RUPEE_SYMBOL: &str = "₹";

thread_local! {
    // ICU data payloads are not Sync, so each thread builds its own formatter.
    static EN_IN_FORMATTER: Option<FixedDecimalFormatter> = FixedDecimalFormatter::try_new(
        &locale!("en-IN").into(),
        FixedDecimalFormatterOptions::default(),
    )
    .map_err(|e| tracing::warn!(error = %e, "en-IN formatter unavailable, falling back to plain digits"))
    .ok();
}

/// Group the digits of a non-negative whole number the en-IN way.
///
/// `digits` must contain only ASCII digits.
fn group_en_in(digits: &str) -> String {
    let decimal: FixedDecimal = match digits.parse() {
        Ok(d) => d,
        Err(_) => return digits.to_string(),
    };

    EN_IN_FORMATTER.with(|formatter| match formatter {
        Some(formatter) => formatter.format(&decimal).write_to_string().into_owned(),
        None => digits.to_string(),
    })
}

/// Round to a whole number and group digits, e.g. `500000.4` -> `5,00,000`.
///
/// Non-finite values render as `NaN` or `∞` instead of failing.
pub fn format_whole(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let rounded = value.round();
    let grouped = group_en_in(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount as rupees with no fraction digits, e.g. `₹4,339`.
///
/// # Example
///
/// ```rust
/// use calc_core::format::format_inr;
///
/// assert_eq!(format_inr(500_000.0), "₹5,00,000");
/// assert_eq!(format_inr(-1234.0), "-₹1,234");
/// ```
pub fn format_inr(value: f64) -> String {
    let body = format_whole(value);
    match body.strip_prefix('-') {
        Some(rest) => format!("-{}{}", RUPEE_SYMBOL, rest),
        None => format!("{}{}", RUPEE_SYMBOL, body),
    }
}

/// BMI with exactly one decimal, e.g. `24.2`.
pub fn format_bmi(value: f64) -> String {
    format!("{:.1}", value)
}

/// Percentage with up to two decimals and no trailing zeros, e.g. `33.33%`, `25%`.
pub fn format_percent(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    // "-0" after trimming a tiny negative
    if text == "-0" {
        return "0%".to_string();
    }
    format!("{}%", text)
}
