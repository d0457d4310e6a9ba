use super::ui;
use crate::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::{LoanInput, LoanResult};
use anyhow::Result;
use comfy_table::{Cell, Color};
use tracing::debug;

impl LoanResult {
    pub fn display_as_table(&self, input: &LoanInput, symbol: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Loan Amount"),
            ui::header_cell("Annual Rate"),
            ui::header_cell("Months"),
            ui::header_cell("Monthly Payment"),
            ui::header_cell("Overpayment"),
            ui::header_cell("Total Paid"),
        ]);
        table.add_row(vec![
            ui::money_cell(symbol, input.principal),
            ui::percent_cell(input.annual_rate_percent),
            Cell::new(input.term_months),
            ui::highlight_cell(ui::money(symbol, self.monthly_payment), Color::Blue),
            ui::highlight_cell(ui::money(symbol, self.overpayment), Color::Yellow),
            ui::money_cell(symbol, self.total_paid),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Credit Calculator", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}\n{}",
            ui::bar(self.overpayment_bar_percent(), 40),
            ui::style_text(
                &format!(
                    "Overpayment is {:.1}% of the loan",
                    self.overpayment_percent()
                ),
                ui::StyleType::Subtle
            )
        ));
        output
    }
}

pub fn resolve_input(
    config: &AppConfig,
    amount: Option<f64>,
    rate: Option<f64>,
    months: Option<u32>,
) -> LoanInput {
    let defaults = config.loan;
    LoanInput {
        principal: amount.unwrap_or(defaults.principal),
        annual_rate_percent: rate.unwrap_or(defaults.annual_rate_percent),
        term_months: super::clamp_period(
            "months",
            months.unwrap_or(defaults.term_months),
            super::MAX_TERM_MONTHS,
        ),
    }
}

pub fn render(
    config: &AppConfig,
    amount: Option<f64>,
    rate: Option<f64>,
    months: Option<u32>,
    format: OutputFormat,
) -> Result<String> {
    let input = resolve_input(config, amount, rate, months);
    let result = input.compute();
    debug!(?input, ?result, "Computed loan payment");

    Ok(match format {
        OutputFormat::Table => result.display_as_table(&input, config.currency_symbol()),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = AppConfig::default();
        let input = resolve_input(&config, Some(5000.0), None, Some(24));
        assert_eq!(input.principal, 5000.0);
        assert_eq!(input.annual_rate_percent, 12.0);
        assert_eq!(input.term_months, 24);
    }

    #[test]
    fn test_months_clamped_but_amount_is_not() {
        let config = AppConfig::default();
        let input = resolve_input(&config, Some(-100.0), Some(-3.0), Some(0));
        assert_eq!(input.term_months, 1);
        assert_eq!(input.principal, -100.0);
        assert_eq!(input.annual_rate_percent, -3.0);

        let input = resolve_input(&config, None, None, Some(u32::MAX));
        assert_eq!(input.term_months, crate::cli::MAX_TERM_MONTHS);
    }

    #[test]
    fn test_table_output() {
        let config = AppConfig::default();
        let output = render(&config, None, None, None, OutputFormat::Table).unwrap();
        assert!(output.contains("Credit Calculator"));
        assert!(output.contains("$888.49"));
        assert!(output.contains("$661.85"));
        assert!(output.contains("$10661.85"));
        assert!(output.contains("Overpayment is 6.6% of the loan"));
    }
}
