//! Terminal front-end for the calculators

pub mod budget;
pub mod inflation;
pub mod loan;
pub mod savings;
pub mod setup;
pub mod traps;
pub mod ui;

use tracing::warn;

/// Longest loan term accepted, in months.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Longest inflation or savings horizon accepted, in years.
pub const MAX_YEARS: u32 = 100;

/// Keeps a month or year count within `1..=max`. The lower bound is how the
/// calculator inputs always behaved; the upper bound keeps the yearly
/// projection a sane size. Amounts and rates are passed through untouched.
pub(crate) fn clamp_period(field: &str, value: u32, max: u32) -> u32 {
    if value < 1 {
        warn!(field, value, "Period below minimum, using 1");
        1
    } else if value > max {
        warn!(field, value, max, "Period above maximum, using {max}");
        max
    } else {
        value
    }
}
