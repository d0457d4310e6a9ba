//! Purchasing power erosion.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationInput {
    pub present_amount: f64,
    pub years: u32,
    pub annual_inflation_percent: f64,
}

impl Default for InflationInput {
    fn default() -> Self {
        InflationInput {
            present_amount: 1000.0,
            years: 5,
            annual_inflation_percent: 5.0,
        }
    }
}

impl InflationInput {
    pub fn compute(&self) -> InflationResult {
        compute_inflation_loss(
            self.present_amount,
            self.years,
            self.annual_inflation_percent,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    pub present_amount: f64,
    pub real_value: f64,
    pub purchasing_power_loss: f64,
    pub loss_percent: f64,
}

/// Discounts `present_amount` by compound inflation over `years`.
///
/// Negative inflation is deflation and yields a real value above the present
/// amount. A zero present amount gives a NaN `loss_percent`.
pub fn compute_inflation_loss(
    present_amount: f64,
    years: u32,
    annual_inflation_percent: f64,
) -> InflationResult {
    let growth = (1.0 + annual_inflation_percent / 100.0).powf(f64::from(years));
    let real_value = present_amount / growth;
    let loss = present_amount - real_value;

    InflationResult {
        present_amount,
        real_value,
        purchasing_power_loss: loss,
        loss_percent: loss / present_amount * 100.0,
    }
}
