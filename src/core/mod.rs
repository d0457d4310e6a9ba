//! Core calculators and configuration

pub mod budget;
pub mod config;
pub mod inflation;
pub mod loan;
pub mod log;
pub mod savings;
pub mod traps;

// Re-export main types for cleaner imports
pub use budget::{BudgetPlan, BudgetStatus, BudgetSummary, summarize_budget};
pub use inflation::{InflationInput, InflationResult, compute_inflation_loss};
pub use loan::{LoanInput, LoanResult, compute_loan_payment};
pub use savings::{SavingsInput, SavingsResult, YearlyProjection, compute_savings_growth};
