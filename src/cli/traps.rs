use super::ui;
use crate::OutputFormat;
use crate::core::traps::{self, TrapOutcome, TrapRun};
use anyhow::{Result, bail};
use comfy_table::{Cell, Color};
use tracing::debug;

impl TrapRun {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("#"),
            ui::header_cell("Situation"),
            ui::header_cell("Your Choice"),
            ui::header_cell("Result"),
            ui::header_cell("Why"),
        ]);
        for (i, step) in self.steps.iter().enumerate() {
            let verdict = if step.safe {
                Cell::new("Safe").fg(Color::Green)
            } else {
                Cell::new("Trapped").fg(Color::Red)
            };
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(step.text),
                Cell::new(step.choice),
                verdict,
                Cell::new(step.explanation),
            ]);
        }

        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text(self.title, ui::StyleType::Title),
            ui::style_text(self.intro, ui::StyleType::Subtle)
        );
        output.push_str(&table.to_string());

        let verdict = match self.outcome {
            Some(TrapOutcome::Survived) => ui::style_text(
                &format!("You survived! +{} XP", self.xp_earned),
                ui::StyleType::TotalValue,
            ),
            Some(TrapOutcome::Trapped) => {
                ui::style_text("You fell into the trap. +0 XP", ui::StyleType::Error)
            }
            None => ui::style_text(
                "Scenario unfinished, pass more choices to continue",
                ui::StyleType::Warning,
            ),
        };
        output.push_str(&format!("\n\n{verdict}"));
        output
    }
}

/// Lists the available scenarios.
pub fn display_catalog() -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Scenario"),
        ui::header_cell("Title"),
        ui::header_cell("Steps"),
        ui::header_cell("Intro"),
    ]);
    for scenario in traps::scenarios() {
        table.add_row(vec![
            Cell::new(scenario.kind),
            Cell::new(scenario.title),
            Cell::new(scenario.steps.len()),
            Cell::new(scenario.intro),
        ]);
    }
    format!(
        "{}\n\n{}",
        ui::style_text("Financial Traps", ui::StyleType::Title),
        table
    )
}

/// Converts one-based choice numbers, as shown to the player, to indices.
pub fn to_indices(choices: &[usize]) -> Result<Vec<usize>> {
    choices
        .iter()
        .map(|&c| {
            if c == 0 {
                bail!("Choices are numbered from 1");
            }
            Ok(c - 1)
        })
        .collect()
}

pub fn render(scenario: Option<&str>, choices: &[usize], format: OutputFormat) -> Result<String> {
    let Some(kind) = scenario else {
        return Ok(match format {
            OutputFormat::Table => display_catalog(),
            OutputFormat::Json => serde_json::to_string_pretty(traps::scenarios())?,
        });
    };

    let scenario = traps::find_scenario(kind)?;
    let run = traps::play(scenario, &to_indices(choices)?)?;
    debug!(
        scenario = run.kind,
        steps = run.steps.len(),
        outcome = ?run.outcome,
        "Played trap scenario"
    );

    Ok(match format {
        OutputFormat::Table => run.display_as_table(),
        OutputFormat::Json => serde_json::to_string_pretty(&run)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survived_walkthrough() {
        let output = render(Some("scam"), &[2, 2], OutputFormat::Table).unwrap();
        assert!(output.contains("The \"Bank\" Call"));
        assert!(output.contains("Safe"));
        assert!(!output.contains("Trapped"));
        assert!(output.contains("You survived! +50 XP"));
    }

    #[test]
    fn test_trapped_walkthrough() {
        let output = render(Some("impulse"), &[1], OutputFormat::Table).unwrap();
        assert!(output.contains("Trapped"));
        assert!(output.contains("You fell into the trap. +0 XP"));
    }

    #[test]
    fn test_json_run() {
        let output = render(Some("bad_loan"), &[2, 2], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["outcome"], "survived");
        assert_eq!(value["xp_earned"], 50);
        assert_eq!(value["steps"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_catalog_without_scenario() {
        let output = render(None, &[], OutputFormat::Table).unwrap();
        for kind in ["scam", "impulse", "pyramid", "bad_loan"] {
            assert!(output.contains(kind));
        }
    }

    #[test]
    fn test_unknown_scenario_is_an_error() {
        assert!(render(Some("lottery"), &[1], OutputFormat::Table).is_err());
    }

    #[test]
    fn test_choice_zero_is_rejected() {
        let err = to_indices(&[1, 0]).unwrap_err();
        assert!(err.to_string().contains("numbered from 1"));
        assert_eq!(to_indices(&[2, 1]).unwrap(), vec![1, 0]);
    }
}
