//! # EMI Calculation
//!
//! Equated Monthly Installment for a fixed-rate loan, repaid in equal
//! monthly payments over the tenure.
//!
//! ## Formula
//!
//! ```text
//! R   = annual_rate_percent / 12 / 100        (monthly rate)
//! N   = tenure_years * 12                     (number of installments)
//! EMI = P * R * (1+R)^N / ((1+R)^N - 1)
//!
//! total_payable  = EMI * N
//! total_interest = total_payable - P
//! ```
//!
//! With a zero interest rate the formula degenerates to 0/0; in that case
//! the principal is simply split evenly: `EMI = P / N`.
//!
//! The annuity factor is evaluated as `P * R / (1 - (1+R)^-N)` using
//! `ln_1p`/`exp_m1`, which stays finite for rates too small to change
//! `1 + R` and for tenures long enough to overflow `(1+R)^N`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::emi::{calculate, LoanInput};
//!
//! let input = LoanInput::new(500_000.0, 8.5, 20.0);
//! let result = calculate(&input).unwrap();
//! let shown = result.rounded();
//!
//! assert_eq!(shown.monthly_installment, 4339.0);
//! assert_eq!(shown.total_payable, 1_041_388.0);
//! assert_eq!(shown.total_interest, 541_388.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::parse::{require_finite_result, require_non_negative, require_positive};

/// Longest repayment schedule that will be tabulated (100 years).
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Input parameters for a loan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 500000.0,
///   "annual_rate_percent": 8.5,
///   "tenure_years": 20.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed, in currency units
    pub principal: f64,

    /// Nominal yearly interest rate in percent (8.5 means 8.5% p.a.)
    pub annual_rate_percent: f64,

    /// Repayment period in years
    pub tenure_years: f64,
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> Self {
        LoanInput {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_positive("tenure_years", self.tenure_years)?;
        Ok(())
    }

    /// Monthly interest rate as a fraction: R = A / 12 / 100
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    /// Number of monthly installments: N = Y * 12
    pub fn installments(&self) -> f64 {
        self.tenure_years * 12.0
    }
}

/// Results from an EMI calculation. Values are unrounded.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_rate": 0.0070833,
///   "installments": 240.0,
///   "monthly_installment": 4339.116,
///   "total_payable": 1041387.88,
///   "total_interest": 541387.88
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Monthly rate R used in the formula
    pub monthly_rate: f64,

    /// Number of installments N
    pub installments: f64,

    /// Equated monthly installment
    pub monthly_installment: f64,

    /// EMI * N
    pub total_payable: f64,

    /// total_payable - principal
    pub total_interest: f64,
}

/// Loan figures rounded to the nearest whole currency unit for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedLoanResult {
    pub monthly_installment: f64,
    pub total_payable: f64,
    pub total_interest: f64,
}

impl LoanResult {
    /// Round each figure independently from its unrounded value.
    pub fn rounded(&self) -> RoundedLoanResult {
        RoundedLoanResult {
            monthly_installment: self.monthly_installment.round(),
            total_payable: self.total_payable.round(),
            total_interest: self.total_interest.round(),
        }
    }

    /// Share of the total payable that is interest, in percent.
    pub fn interest_share_percent(&self) -> f64 {
        if self.total_payable == 0.0 {
            return 0.0;
        }
        self.total_interest / self.total_payable * 100.0
    }
}

/// Calculate the EMI for a loan.
///
/// # Returns
///
/// * `Ok(LoanResult)` - Calculation results
/// * `Err(CalcError)` - If principal or tenure is not positive, the rate is
///   negative, or any value is not a finite number
pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;

    let principal = input.principal;
    let rate = input.monthly_rate();
    let n = input.installments();

    // 1 - (1+R)^-N
    let discount = -(-n * rate.ln_1p()).exp_m1();
    let monthly_installment = if rate == 0.0 || discount == 0.0 {
        principal / n
    } else {
        principal * rate / discount
    };

    let monthly_installment = require_finite_result("principal", monthly_installment)?;
    let total_payable = require_finite_result("tenure_years", monthly_installment * n)?;
    let total_interest = total_payable - principal;

    tracing::debug!(
        principal,
        monthly_rate = rate,
        installments = n,
        monthly_installment,
        "emi calculated"
    );

    Ok(LoanResult {
        monthly_rate: rate,
        installments: n,
        monthly_installment,
        total_payable,
        total_interest,
    })
}

/// One month of a repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based month number
    pub month: u32,
    /// Amount paid this month (interest + principal)
    pub payment: f64,
    /// Part of the payment that reduces the principal
    pub principal: f64,
    /// Part of the payment that is interest on the opening balance
    pub interest: f64,
    /// Outstanding principal after this payment
    pub balance: f64,
}

/// Month-by-month split of each installment into interest and principal.
///
/// A fractional number of installments produces a final, smaller payment
/// that clears the remaining balance. The last row always ends at a zero
/// balance.
pub fn amortization_schedule(input: &LoanInput) -> CalcResult<Vec<ScheduleRow>> {
    let result = calculate(input)?;

    let months = result.installments.ceil();
    if months > f64::from(MAX_SCHEDULE_MONTHS) {
        return Err(CalcError::out_of_range(
            "tenure_years",
            input.tenure_years,
            f64::from(MAX_SCHEDULE_MONTHS / 12),
        ));
    }
    let months = months as u32;

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = input.principal;

    for month in 1..=months {
        let interest = balance * result.monthly_rate;
        let principal = if month == months {
            balance
        } else {
            (result.monthly_installment - interest).min(balance)
        };
        balance -= principal;

        rows.push(ScheduleRow {
            month,
            payment: interest + principal,
            principal,
            interest,
            balance,
        });
    }

    Ok(rows)
}
