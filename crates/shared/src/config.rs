//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// HTTP Basic credentials.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Currency table and code rules.
    #[serde(default)]
    pub currencies: CurrenciesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// HTTP Basic authentication configuration.
///
/// Authentication is enforced only when both fields are set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Expected user name.
    pub username: Option<String>,
    /// Expected password.
    pub password: Option<String>,
}

impl AuthConfig {
    /// Returns the configured credential pair, if complete.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) if !user.is_empty() => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

/// How incoming currency codes are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePolicy {
    /// Any well-formed three-letter code.
    #[default]
    FreeForm,
    /// Only codes listed in `allowed_codes`.
    Closed,
}

/// One row of the startup currency table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedCurrency {
    /// Three-letter code.
    pub iso_code: String,
    /// Display name.
    pub name: String,
    /// USD per unit of this currency.
    pub usd_rate: Decimal,
}

impl SeedCurrency {
    /// Creates a seed row.
    #[must_use]
    pub fn new(iso_code: &str, name: &str, usd_rate: Decimal) -> Self {
        Self {
            iso_code: iso_code.to_string(),
            name: name.to_string(),
            usd_rate,
        }
    }
}

/// Currency configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrenciesConfig {
    /// Code acceptance policy.
    #[serde(default)]
    pub code_policy: CodePolicy,
    /// Codes accepted under `CodePolicy::Closed`.
    #[serde(default)]
    pub allowed_codes: Vec<String>,
    /// Currencies loaded into the store at startup.
    #[serde(default = "baseline_seed")]
    pub seed: Vec<SeedCurrency>,
}

impl Default for CurrenciesConfig {
    fn default() -> Self {
        Self {
            code_policy: CodePolicy::default(),
            allowed_codes: Vec::new(),
            seed: baseline_seed(),
        }
    }
}

/// USD, BRL, ARS and PEN with their USD rates.
#[must_use]
pub fn baseline_seed() -> Vec<SeedCurrency> {
    vec![
        SeedCurrency::new("USD", "Dólar", Decimal::ONE),
        SeedCurrency::new("BRL", "Real", Decimal::new(19, 2)),
        SeedCurrency::new("ARS", "Peso Argentino", Decimal::new(5, 3)),
        SeedCurrency::new("PEN", "Sol", Decimal::new(27, 2)),
    ]
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CAMBIO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("currencies.allowed_codes")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
