//! Loan amortization.
use serde::{Deserialize, Serialize};

/// Inputs for a fixed-payment loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl Default for LoanInput {
    fn default() -> Self {
        LoanInput {
            principal: 10000.0,
            annual_rate_percent: 12.0,
            term_months: 12,
        }
    }
}

impl LoanInput {
    pub fn compute(&self) -> LoanResult {
        compute_loan_payment(self.principal, self.annual_rate_percent, self.term_months)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub overpayment: f64,
}

impl LoanResult {
    /// Overpayment as a percentage of the principal.
    pub fn overpayment_percent(&self) -> f64 {
        self.overpayment / self.principal * 100.0
    }

    /// Overpayment percentage capped at 100, for drawing a bounded bar.
    pub fn overpayment_bar_percent(&self) -> f64 {
        self.overpayment_percent().min(100.0)
    }
}

/// Computes the fixed monthly payment of an amortizing loan.
///
/// A non-positive monthly rate splits the principal evenly across the term.
/// Inputs are not validated: `term_months` must be at least 1, otherwise the
/// result is NaN or infinite. Non-finite inputs propagate the same way.
pub fn compute_loan_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> LoanResult {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let months = f64::from(term_months);

    let monthly_payment = if monthly_rate > 0.0 {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-months))
    } else {
        principal / months
    };
    let total_paid = monthly_payment * months;

    LoanResult {
        principal,
        monthly_payment,
        total_paid,
        overpayment: total_paid - principal,
    }
}
