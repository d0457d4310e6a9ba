//! Compound savings growth from a fixed monthly contribution.
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsInput {
    pub monthly_contribution: f64,
    pub annual_return_percent: f64,
    pub years: u32,
}

impl Default for SavingsInput {
    fn default() -> Self {
        SavingsInput {
            monthly_contribution: 200.0,
            annual_return_percent: 8.0,
            years: 10,
        }
    }
}

impl SavingsInput {
    pub fn compute(&self) -> SavingsResult {
        compute_savings_growth(
            self.monthly_contribution,
            self.annual_return_percent,
            self.years,
        )
    }

    /// Balance at the end of each year, starting from year 0.
    pub fn projection(&self) -> YearlyProjection {
        YearlyProjection::new(
            self.monthly_contribution,
            self.annual_return_percent,
            self.years,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub future_value: f64,
    pub total_contributed: f64,
    pub interest_earned: f64,
    /// Balance at years `0..=years`.
    pub projection: Vec<f64>,
}

impl SavingsResult {
    /// Projection points scaled to 0..=100 against the largest point.
    ///
    /// The divisor is never below 1, so an all-zero projection stays at zero.
    pub fn chart_heights(&self) -> Vec<f64> {
        let max = self.projection.iter().copied().fold(1.0, f64::max);
        self.projection.iter().map(|v| v / max * 100.0).collect()
    }
}

/// Future value of an ordinary annuity paying `contribution` for `months`.
fn annuity_future_value(contribution: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate > 0.0 {
        contribution * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
    } else {
        contribution * months
    }
}

/// Restartable iterator over yearly balances.
///
/// Each point is evaluated from the closed-form annuity formula rather than
/// accumulated, so point `y` matches a direct computation over `y` years.
#[derive(Debug, Clone)]
pub struct YearlyProjection {
    contribution: f64,
    monthly_rate: f64,
    next_year: u32,
    years: u32,
    exhausted: bool,
}

impl YearlyProjection {
    pub fn new(monthly_contribution: f64, annual_return_percent: f64, years: u32) -> Self {
        YearlyProjection {
            contribution: monthly_contribution,
            monthly_rate: annual_return_percent / 100.0 / 12.0,
            next_year: 0,
            years,
            exhausted: false,
        }
    }
}

impl Iterator for YearlyProjection {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.exhausted {
            return None;
        }
        let year = self.next_year;
        if year == self.years {
            self.exhausted = true;
        } else {
            self.next_year += 1;
        }
        let months = f64::from(year) * 12.0;
        Some(annuity_future_value(
            self.contribution,
            self.monthly_rate,
            months,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted {
            0
        } else {
            (self.years - self.next_year) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for YearlyProjection {}

impl FusedIterator for YearlyProjection {}

/// Projects savings from equal monthly contributions compounded monthly.
///
/// A non-positive return rate degenerates to the plain sum of contributions.
pub fn compute_savings_growth(
    monthly_contribution: f64,
    annual_return_percent: f64,
    years: u32,
) -> SavingsResult {
    let monthly_rate = annual_return_percent / 100.0 / 12.0;
    let total_months = f64::from(years) * 12.0;

    let future_value = annuity_future_value(monthly_contribution, monthly_rate, total_months);
    let total_contributed = monthly_contribution * total_months;

    SavingsResult {
        future_value,
        total_contributed,
        interest_earned: future_value - total_contributed,
        projection: YearlyProjection::new(monthly_contribution, annual_return_percent, years)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_return_is_simple_sum() {
        let result = compute_savings_growth(200.0, 0.0, 10);
        assert_eq!(result.future_value, 24000.0);
        assert_eq!(result.total_contributed, 24000.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_reference_savings() {
        let result = SavingsInput::default().compute();
        assert!((result.future_value - 36589.21).abs() < 0.01);
        assert_eq!(result.total_contributed, 24000.0);
        assert!((result.interest_earned - 12589.21).abs() < 0.01);
    }

    #[test]
    fn test_projection_length_and_endpoints() {
        let result = compute_savings_growth(200.0, 8.0, 10);
        assert_eq!(result.projection.len(), 11);
        assert_eq!(result.projection[0], 0.0);
        assert_eq!(result.projection[10], result.future_value);
        assert!((result.projection[1] - 2489.99).abs() < 0.01);
    }

    #[test]
    fn test_projection_matches_direct_computation() {
        let result = compute_savings_growth(350.0, 6.5, 25);
        for (year, point) in result.projection.iter().enumerate() {
            let direct = compute_savings_growth(350.0, 6.5, year as u32).future_value;
            assert_eq!(*point, direct);
        }
    }

    #[test]
    fn test_projection_is_monotonic() {
        for rate in [0.0, 1.0, 8.0, 15.0] {
            let points: Vec<f64> = YearlyProjection::new(100.0, rate, 30).collect();
            assert!(points.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_projection_is_restartable_and_exact_size() {
        let projection = SavingsInput::default().projection();
        assert_eq!(projection.len(), 11);

        let first: Vec<f64> = projection.clone().collect();
        let second: Vec<f64> = projection.collect();
        assert_eq!(first, second);

        let mut zero_years = YearlyProjection::new(100.0, 5.0, 0);
        assert_eq!(zero_years.len(), 1);
        assert_eq!(zero_years.next(), Some(0.0));
        assert_eq!(zero_years.next(), None);
        assert_eq!(zero_years.next(), None);
    }

    #[test]
    fn test_chart_heights() {
        let result = compute_savings_growth(200.0, 0.0, 2);
        assert_eq!(result.chart_heights(), vec![0.0, 50.0, 100.0]);

        let empty = compute_savings_growth(0.0, 8.0, 3);
        assert!(empty.chart_heights().iter().all(|h| *h == 0.0));
    }
}
