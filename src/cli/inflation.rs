use super::ui;
use crate::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::{InflationInput, InflationResult};
use anyhow::Result;
use comfy_table::{Cell, Color};
use tracing::debug;

impl InflationResult {
    pub fn display_as_table(&self, input: &InflationInput, symbol: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Today"),
            ui::header_cell("Years"),
            ui::header_cell("Inflation (%/yr)"),
            ui::header_cell("Real Value"),
            ui::header_cell("Lost"),
        ]);
        table.add_row(vec![
            ui::money_cell(symbol, self.present_amount).fg(Color::Green),
            Cell::new(input.years),
            ui::percent_cell(input.annual_inflation_percent),
            ui::highlight_cell(ui::money(symbol, self.real_value), Color::Red),
            ui::change_cell(symbol, -self.purchasing_power_loss),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Inflation Calculator", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());

        let summary = if self.purchasing_power_loss >= 0.0 {
            format!(
                "You lose {} ({:.1}%) to inflation",
                ui::money(symbol, self.purchasing_power_loss),
                self.loss_percent
            )
        } else {
            format!(
                "You gain {} ({:.1}%) from deflation",
                ui::money(symbol, -self.purchasing_power_loss),
                -self.loss_percent
            )
        };
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(&summary, ui::StyleType::Warning)
        ));
        output
    }
}

pub fn resolve_input(
    config: &AppConfig,
    amount: Option<f64>,
    years: Option<u32>,
    rate: Option<f64>,
) -> InflationInput {
    let defaults = config.inflation;
    InflationInput {
        present_amount: amount.unwrap_or(defaults.present_amount),
        years: super::clamp_period(
            "years",
            years.unwrap_or(defaults.years),
            super::MAX_YEARS,
        ),
        annual_inflation_percent: rate.unwrap_or(defaults.annual_inflation_percent),
    }
}

pub fn render(
    config: &AppConfig,
    amount: Option<f64>,
    years: Option<u32>,
    rate: Option<f64>,
    format: OutputFormat,
) -> Result<String> {
    let input = resolve_input(config, amount, years, rate);
    let result = input.compute();
    debug!(?input, ?result, "Computed inflation loss");

    Ok(match format {
        OutputFormat::Table => result.display_as_table(&input, config.currency_symbol()),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    })
}
