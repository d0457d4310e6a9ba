use crate::core::budget::{DEFAULT_CATEGORIES, DEFAULT_MONTHLY_INCOME};
use crate::core::{InflationInput, LoanInput, SavingsInput};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BudgetConfig {
    pub monthly_income: f64,
    pub categories: Vec<String>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        BudgetConfig {
            monthly_income: DEFAULT_MONTHLY_INCOME,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub loan: LoanInput,
    #[serde(default)]
    pub inflation: InflationInput,
    #[serde(default)]
    pub savings: SavingsInput,
    #[serde(default)]
    pub budget: BudgetConfig,
    pub currency_symbol: Option<String>,
}

impl AppConfig {
    /// Loads the config at the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "finlit", "finlit")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn currency_symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
loan:
  principal: 25000
  annual_rate_percent: 7.5
  term_months: 60
inflation:
  present_amount: 5000
  years: 10
  annual_inflation_percent: 3.0
savings:
  monthly_contribution: 150
  annual_return_percent: 6
  years: 20
budget:
  monthly_income: 4200
  categories: ["Rent", "Food", "Fun"]
currency_symbol: "€"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.loan.principal, 25000.0);
        assert_eq!(config.loan.annual_rate_percent, 7.5);
        assert_eq!(config.loan.term_months, 60);
        assert_eq!(config.inflation.present_amount, 5000.0);
        assert_eq!(config.inflation.years, 10);
        assert_eq!(config.savings.monthly_contribution, 150.0);
        assert_eq!(config.savings.years, 20);
        assert_eq!(config.budget.monthly_income, 4200.0);
        assert_eq!(config.budget.categories, vec!["Rent", "Food", "Fun"]);
        assert_eq!(config.currency_symbol(), "€");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml_str = r#"
loan:
  term_months: 24
savings:
  annual_return_percent: 0
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.loan.principal, 10000.0);
        assert_eq!(config.loan.annual_rate_percent, 12.0);
        assert_eq!(config.loan.term_months, 24);
        assert_eq!(config.savings.monthly_contribution, 200.0);
        assert_eq!(config.savings.annual_return_percent, 0.0);
        assert_eq!(config.inflation, InflationInput::default());
        assert_eq!(config.budget, BudgetConfig::default());
        assert_eq!(config.currency_symbol(), "$");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("nope.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
