use finlit::{AppCommand, OutputFormat, render_command, run_command};
use std::fs;
use tracing::info;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), content).expect("Failed to write config file");
    config_file
}

#[test_log::test]
fn test_loan_flow_with_config_defaults() {
    let config_file = write_config(
        r#"
        loan:
          principal: 1200
          annual_rate_percent: 0
          term_months: 12
        currency_symbol: "€"
    "#,
    );

    let output = render_command(
        AppCommand::Loan {
            amount: None,
            rate: None,
            months: None,
        },
        config_file.path().to_str(),
        OutputFormat::Table,
    )
    .expect("loan command failed");
    info!("{output}");

    assert!(output.contains("€100.00"));
    assert!(output.contains("€0.00"));
    assert!(output.contains("Overpayment is 0.0% of the loan"));
}

#[test_log::test]
fn test_flags_override_config_file() {
    let config_file = write_config(
        r#"
        savings:
          monthly_contribution: 50
          annual_return_percent: 3
          years: 40
    "#,
    );

    let output = render_command(
        AppCommand::Savings {
            monthly: Some(200.0),
            rate: Some(8.0),
            years: Some(10),
        },
        config_file.path().to_str(),
        OutputFormat::Json,
    )
    .expect("savings command failed");

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let future_value = value["future_value"].as_f64().unwrap();
    assert!((future_value - 36589.21).abs() < 0.01);
    assert_eq!(value["total_contributed"].as_f64(), Some(24000.0));
    assert_eq!(value["projection"].as_array().map(Vec::len), Some(11));
}

#[test_log::test]
fn test_inflation_json_flow() {
    let config_file = write_config("inflation:\n  years: 0\n");

    let output = render_command(
        AppCommand::Inflation {
            amount: None,
            years: None,
            rate: Some(0.0),
        },
        config_file.path().to_str(),
        OutputFormat::Json,
    )
    .expect("inflation command failed");

    // Zero years from the config is clamped to one, zero inflation is identity.
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["real_value"].as_f64(), Some(1000.0));
    assert_eq!(value["purchasing_power_loss"].as_f64(), Some(0.0));
}

#[test_log::test]
fn test_budget_flow_with_custom_categories() {
    let config_file = write_config(
        r#"
        budget:
          monthly_income: 2000
          categories: ["Rent", "Food", "Savings"]
    "#,
    );

    let output = render_command(
        AppCommand::Budget {
            income: None,
            allocations: vec![
                ("rent".to_string(), 1000.0),
                ("food".to_string(), 500.0),
                ("savings".to_string(), 480.0),
            ],
        },
        config_file.path().to_str(),
        OutputFormat::Json,
    )
    .expect("budget command failed");

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total_allocated"].as_f64(), Some(1980.0));
    assert_eq!(value["remaining"].as_f64(), Some(20.0));
    assert_eq!(value["status"], "Under");
    assert_eq!(value["can_submit"], true);
    assert_eq!(value["shares"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["shares"][0]["category"], "Rent");
    assert_eq!(value["shares"][0]["percent_of_income"].as_f64(), Some(50.0));
}

#[test_log::test]
fn test_run_command_prints_table() {
    let config_file = write_config("currency_symbol: \"$\"\n");

    let result = run_command(
        AppCommand::Loan {
            amount: Some(10000.0),
            rate: Some(12.0),
            months: Some(12),
        },
        config_file.path().to_str(),
        OutputFormat::Table,
    );
    assert!(result.is_ok(), "run_command failed with: {:?}", result.err());
}

#[test_log::test]
fn test_missing_config_path_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");

    let result = render_command(
        AppCommand::Savings {
            monthly: None,
            rate: None,
            years: None,
        },
        missing.to_str(),
        OutputFormat::Table,
    );
    let err = result.expect_err("missing config should fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test_log::test]
fn test_malformed_config_is_an_error() {
    let config_file = write_config("loan:\n  term_months: twelve\n");

    let result = render_command(
        AppCommand::Loan {
            amount: None,
            rate: None,
            months: None,
        },
        config_file.path().to_str(),
        OutputFormat::Table,
    );
    let err = result.expect_err("malformed config should fail");
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test_log::test]
fn test_setup_writes_loadable_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    finlit::cli::setup::setup_at_path(&path).expect("setup failed");

    let output = render_command(
        AppCommand::Inflation {
            amount: None,
            years: None,
            rate: None,
        },
        path.to_str(),
        OutputFormat::Table,
    )
    .expect("inflation command failed");
    assert!(output.contains("$783.53"));
}

#[test_log::test]
fn test_traps_flow() {
    let config_file = write_config("currency_symbol: \"$\"\n");

    let survived = render_command(
        AppCommand::Traps {
            scenario: Some("pyramid".to_string()),
            choices: vec![2, 2],
        },
        config_file.path().to_str(),
        OutputFormat::Json,
    )
    .expect("traps command failed");
    let value: serde_json::Value = serde_json::from_str(&survived).unwrap();
    assert_eq!(value["outcome"], "survived");
    assert_eq!(value["xp_earned"].as_u64(), Some(50));

    let trapped = render_command(
        AppCommand::Traps {
            scenario: Some("pyramid".to_string()),
            choices: vec![1, 2],
        },
        config_file.path().to_str(),
        OutputFormat::Json,
    )
    .expect("traps command failed");
    let value: serde_json::Value = serde_json::from_str(&trapped).unwrap();
    assert_eq!(value["outcome"], "trapped");
    assert_eq!(value["xp_earned"].as_u64(), Some(0));
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(1));

    let unknown = render_command(
        AppCommand::Traps {
            scenario: Some("lottery".to_string()),
            choices: vec![1],
        },
        config_file.path().to_str(),
        OutputFormat::Table,
    );
    assert!(unknown.is_err());
}
