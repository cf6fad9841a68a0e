//! # Percentage Calculation
//!
//! The three everyday percentage questions:
//!
//! - **Percent of**: what is 15% of 2400? -> 360
//! - **What percent**: 45 is what percent of 180? -> 25%
//! - **Change**: from 80 to 100 is what percent increase? -> +25%
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::percentage::{calculate, PercentageQuery};
//!
//! let result = calculate(&PercentageQuery::PercentOf { percent: 15.0, value: 2400.0 }).unwrap();
//! assert_eq!(result.value, 360.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::parse::{require_finite, require_finite_result};

/// A percentage question.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "percent_change", "from": 80.0, "to": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PercentageQuery {
    /// `percent`% of `value`
    PercentOf { percent: f64, value: f64 },
    /// `part` as a percentage of `whole`
    WhatPercent { part: f64, whole: f64 },
    /// Relative change from `from` to `to`, in percent
    PercentChange { from: f64, to: f64 },
}

impl PercentageQuery {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            PercentageQuery::PercentOf { percent, value } => {
                require_finite("percent", percent)?;
                require_finite("value", value)?;
            }
            PercentageQuery::WhatPercent { part, whole } => {
                require_finite("part", part)?;
                require_finite("whole", whole)?;
                if whole == 0.0 {
                    return Err(CalcError::division_by_zero("whole"));
                }
            }
            PercentageQuery::PercentChange { from, to } => {
                require_finite("from", from)?;
                require_finite("to", to)?;
                if from == 0.0 {
                    return Err(CalcError::division_by_zero("from"));
                }
            }
        }
        Ok(())
    }
}

/// Direction of a percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    Unchanged,
}

/// Result of a percentage question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    /// The answer: an amount for `PercentOf`, a percentage otherwise
    pub value: f64,

    /// True when `value` is a percentage rather than an amount
    pub is_percent: bool,

    /// Only set for `PercentChange`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<ChangeDirection>,
}

impl PercentageResult {
    /// Value rounded to two decimal places
    pub fn display_value(&self) -> f64 {
        let scaled = (self.value * 100.0).round() / 100.0;
        if scaled.is_finite() {
            scaled
        } else {
            self.value
        }
    }
}

/// Answer a percentage question.
pub fn calculate(query: &PercentageQuery) -> CalcResult<PercentageResult> {
    query.validate()?;

    let result = match *query {
        PercentageQuery::PercentOf { percent, value } => PercentageResult {
            value: value * percent / 100.0,
            is_percent: false,
            direction: None,
        },
        PercentageQuery::WhatPercent { part, whole } => PercentageResult {
            value: part / whole * 100.0,
            is_percent: true,
            direction: None,
        },
        PercentageQuery::PercentChange { from, to } => {
            let change = (to - from) / from.abs() * 100.0;
            let direction = if change > 0.0 {
                ChangeDirection::Increase
            } else if change < 0.0 {
                ChangeDirection::Decrease
            } else {
                ChangeDirection::Unchanged
            };
            PercentageResult {
                value: change,
                is_percent: true,
                direction: Some(direction),
            }
        }
    };

    let field = match query {
        PercentageQuery::PercentOf { .. } => "value",
        PercentageQuery::WhatPercent { .. } => "part",
        PercentageQuery::PercentChange { .. } => "to",
    };
    require_finite_result(field, result.value)?;

    tracing::debug!(?query, value = result.value, "percentage calculated");
    Ok(result)
}
