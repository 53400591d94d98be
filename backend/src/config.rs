//! Dashboard configuration.
//!
//! Configuration is optional: when no file exists every value falls back to
//! the defaults below, which reproduce the stock dashboard (USD, a two second
//! simulated payment round-trip and the four standard payment methods).
//!
//! The file is YAML and is looked up in this order:
//! 1. the path in the `TEACHER_DASHBOARD_CONFIG` environment variable
//! 2. `<config dir>/teacher-dashboard/config.yaml`

use log::info;
use serde::{Deserialize, Serialize};
use shared::humanize_method;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "TEACHER_DASHBOARD_CONFIG";

const CONFIG_DIR_NAME: &str = "teacher-dashboard";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// One entry of the payment method dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodOption {
    /// Value stored on the form and the payment record, e.g. "bank-transfer"
    pub value: String,
    /// Label shown in the dropdown, e.g. "Bank Transfer"
    pub label: String,
}

impl PaymentMethodOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Artificial latency of the simulated payment gateway
    pub submission_delay_ms: u64,
    pub currency: String,
    pub currency_symbol: String,
    pub payment_methods: Vec<PaymentMethodOption>,
    /// Alternative fixture to seed the dashboard from; the bundled one is used when unset
    pub fixture_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: 2000,
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            payment_methods: vec![
                PaymentMethodOption::new("bank-transfer", "Bank Transfer"),
                PaymentMethodOption::new("paypal", "PayPal"),
                PaymentMethodOption::new("check", "Check"),
                PaymentMethodOption::new("cash", "Cash"),
            ],
            fixture_path: None,
        }
    }
}

impl DashboardConfig {
    /// Load the configuration from the environment override or the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::resolve_path() {
            Some(path) => Self::load_from(&path),
            None => {
                info!("⚙️ No config directory available, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("⚙️ No config file at {}, using default configuration", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: DashboardConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("⚙️ Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn resolve_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_path()
    }

    /// `<config dir>/teacher-dashboard/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    /// Format an amount with the currency symbol and two decimals
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    /// Dropdown label for a stored method value, falling back to a humanized value
    pub fn method_label(&self, value: &str) -> String {
        self.payment_methods
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| humanize_method(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.submission_delay(), Duration::from_secs(2));
        assert_eq!(config.currency, "USD");
        assert_eq!(config.payment_methods.len(), 4);
        assert_eq!(config.format_amount(2500.0), "$2500.00");
        assert_eq!(config.method_label("paypal"), "PayPal");
        assert_eq!(config.method_label("bank-transfer"), "Bank Transfer");
        assert_eq!(config.method_label("wire-transfer"), "Wire Transfer");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");

        let config = DashboardConfig::load_from(&path).expect("Missing file should not fail");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        writeln!(file, "submission_delay_ms: 50").unwrap();
        writeln!(file, "currency: CAD").unwrap();

        let config = DashboardConfig::load_from(&path).expect("Failed to load config");
        assert_eq!(config.submission_delay_ms, 50);
        assert_eq!(config.currency, "CAD");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.payment_methods.len(), 4);
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "submission_delay_ms: [not, a, number]").unwrap();

        let result = DashboardConfig::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
