use super::ui;
use crate::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::{SavingsInput, SavingsResult};
use anyhow::Result;
use comfy_table::{Cell, Color};
use tracing::debug;

const CHART_WIDTH: usize = 40;

impl SavingsResult {
    pub fn display_as_table(&self, input: &SavingsInput, symbol: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Monthly"),
            ui::header_cell("Return (%/yr)"),
            ui::header_cell("Years"),
            ui::header_cell("Total Saved"),
            ui::header_cell("Contributed"),
            ui::header_cell("Interest Earned"),
        ]);
        table.add_row(vec![
            ui::money_cell(symbol, input.monthly_contribution),
            ui::percent_cell(input.annual_return_percent),
            Cell::new(input.years),
            ui::highlight_cell(ui::money(symbol, self.future_value), Color::Green),
            ui::money_cell(symbol, self.total_contributed),
            ui::change_cell(symbol, self.interest_earned),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Savings Growth", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&self.display_chart(symbol));
        output
    }

    /// One bar per year, scaled as in `chart_heights`: against the largest
    /// point, or 1 when every point is below that.
    fn display_chart(&self, symbol: &str) -> String {
        let label_width = self.projection.len().saturating_sub(1).to_string().len();
        let mut chart = String::from("\n");
        for (year, (value, height)) in self
            .projection
            .iter()
            .zip(self.chart_heights())
            .enumerate()
        {
            chart.push_str(&format!(
                "\n{} {} {}",
                ui::style_text(
                    &format!("Year {year:>label_width$}"),
                    ui::StyleType::Subtle
                ),
                ui::bar(height, CHART_WIDTH),
                ui::money(symbol, *value)
            ));
        }
        chart
    }
}

pub fn resolve_input(
    config: &AppConfig,
    monthly: Option<f64>,
    rate: Option<f64>,
    years: Option<u32>,
) -> SavingsInput {
    let defaults = config.savings;
    SavingsInput {
        monthly_contribution: monthly.unwrap_or(defaults.monthly_contribution),
        annual_return_percent: rate.unwrap_or(defaults.annual_return_percent),
        years: super::clamp_period(
            "years",
            years.unwrap_or(defaults.years),
            super::MAX_YEARS,
        ),
    }
}

pub fn render(
    config: &AppConfig,
    monthly: Option<f64>,
    rate: Option<f64>,
    years: Option<u32>,
    format: OutputFormat,
) -> Result<String> {
    let input = resolve_input(config, monthly, rate, years);
    let result = input.compute();
    debug!(
        ?input,
        future_value = result.future_value,
        points = result.projection.len(),
        "Computed savings growth"
    );

    Ok(match format {
        OutputFormat::Table => result.display_as_table(&input, config.currency_symbol()),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    })
}
