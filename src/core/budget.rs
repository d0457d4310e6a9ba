//! Monthly budget allocation checks.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Categories offered when no custom list is configured.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Rent",
    "Food",
    "Transport",
    "Savings",
    "Entertainment",
    "Utilities",
    "Other",
];

pub const DEFAULT_MONTHLY_INCOME: f64 = 3500.0;

/// Largest unallocated (or overallocated) share of income that still allows
/// submitting the plan.
pub const SUBMIT_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub monthly_income: f64,
    pub allocations: Vec<Allocation>,
}

impl BudgetPlan {
    /// Creates a plan with every category present and nothing allocated.
    pub fn empty<S: AsRef<str>>(monthly_income: f64, categories: &[S]) -> Self {
        BudgetPlan {
            monthly_income,
            allocations: categories
                .iter()
                .map(|c| Allocation {
                    category: c.as_ref().to_string(),
                    amount: 0.0,
                })
                .collect(),
        }
    }

    /// Sets the amount for `category`, adding it if it is not listed yet.
    /// Category names match case-insensitively.
    pub fn allocate(&mut self, category: &str, amount: f64) {
        match self
            .allocations
            .iter_mut()
            .find(|a| a.category.eq_ignore_ascii_case(category))
        {
            Some(existing) => existing.amount = amount,
            None => self.allocations.push(Allocation {
                category: category.to_string(),
                amount,
            }),
        }
    }

    pub fn summarize(&self) -> BudgetSummary {
        summarize_budget(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    Balanced,
    Under,
    Over,
}

impl Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BudgetStatus::Balanced => "balanced",
                BudgetStatus::Under => "left",
                BudgetStatus::Over => "over",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percent_of_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub monthly_income: f64,
    pub total_allocated: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
    pub shares: Vec<CategoryShare>,
    pub can_submit: bool,
}

/// Totals a plan and checks whether it is close enough to income to submit.
///
/// A plan within one currency unit of income is balanced. Shares are zero
/// when income is not positive.
pub fn summarize_budget(plan: &BudgetPlan) -> BudgetSummary {
    let income = plan.monthly_income;
    let total_allocated: f64 = plan.allocations.iter().map(|a| a.amount).sum();
    let remaining = income - total_allocated;

    let status = if remaining.abs() < 1.0 {
        BudgetStatus::Balanced
    } else if remaining > 0.0 {
        BudgetStatus::Under
    } else {
        BudgetStatus::Over
    };

    let shares = plan
        .allocations
        .iter()
        .map(|a| CategoryShare {
            category: a.category.clone(),
            amount: a.amount,
            percent_of_income: if income > 0.0 {
                a.amount / income * 100.0
            } else {
                0.0
            },
        })
        .collect();

    BudgetSummary {
        monthly_income: income,
        total_allocated,
        remaining,
        status,
        shares,
        can_submit: remaining.abs() <= income * SUBMIT_TOLERANCE,
    }
}
