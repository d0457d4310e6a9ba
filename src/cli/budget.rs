use super::ui;
use crate::OutputFormat;
use crate::core::budget::{BudgetPlan, BudgetStatus, BudgetSummary, SUBMIT_TOLERANCE};
use crate::core::config::AppConfig;
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

impl BudgetSummary {
    pub fn display_as_table(&self, symbol: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Category"),
            ui::header_cell("Amount"),
            ui::header_cell("Share"),
            ui::header_cell(""),
        ]);
        for share in &self.shares {
            table.add_row(vec![
                Cell::new(&share.category),
                ui::money_cell(symbol, share.amount),
                ui::percent_cell(share.percent_of_income),
                Cell::new(ui::bar(share.percent_of_income, 20)),
            ]);
        }

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Budget Simulator", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());

        let remaining = match self.status {
            BudgetStatus::Balanced => {
                ui::style_text(&ui::money(symbol, self.remaining), ui::StyleType::TotalValue)
            }
            BudgetStatus::Under => ui::style_text(
                &format!("{} {}", ui::money(symbol, self.remaining), self.status),
                ui::StyleType::Warning,
            ),
            BudgetStatus::Over => ui::style_text(
                &format!("{} {}", ui::money(symbol, -self.remaining), self.status),
                ui::StyleType::Error,
            ),
        };
        output.push_str(&format!(
            "\n\n{}: {}\n{}: {}\n{}: {}",
            ui::style_text("Income", ui::StyleType::TotalLabel),
            ui::money(symbol, self.monthly_income),
            ui::style_text("Allocated", ui::StyleType::TotalLabel),
            ui::money(symbol, self.total_allocated),
            ui::style_text("Remaining", ui::StyleType::TotalLabel),
            remaining
        ));

        output.push('\n');
        if self.can_submit {
            output.push_str(&ui::style_text(
                "Ready to submit",
                ui::StyleType::TotalValue,
            ));
        } else {
            output.push_str(&ui::style_text(
                &format!(
                    "Budget must be within {:.0}% of income to submit",
                    SUBMIT_TOLERANCE * 100.0
                ),
                ui::StyleType::Error,
            ));
        }
        output
    }
}

/// Parses a `CATEGORY=AMOUNT` command-line pair.
pub fn parse_allocation(s: &str) -> Result<(String, f64), String> {
    let (category, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got `{s}`"))?;
    let category = category.trim();
    if category.is_empty() {
        return Err(format!("missing category in `{s}`"));
    }
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("invalid amount in `{s}`"))?;
    Ok((category.to_string(), amount))
}

pub fn build_plan(
    config: &AppConfig,
    income: Option<f64>,
    allocations: &[(String, f64)],
) -> BudgetPlan {
    let mut plan = BudgetPlan::empty(
        income.unwrap_or(config.budget.monthly_income),
        config.budget.categories.as_slice(),
    );
    for (category, amount) in allocations {
        plan.allocate(category, *amount);
    }
    plan
}

pub fn render(
    config: &AppConfig,
    income: Option<f64>,
    allocations: &[(String, f64)],
    format: OutputFormat,
) -> Result<String> {
    let plan = build_plan(config, income, allocations);
    let summary = plan.summarize();
    debug!(
        income = summary.monthly_income,
        allocated = summary.total_allocated,
        status = %summary.status,
        "Summarized budget"
    );

    Ok(match format {
        OutputFormat::Table => summary.display_as_table(config.currency_symbol()),
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
    })
}
