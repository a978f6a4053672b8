use crate::core::ConfigProvider;
use crate::domain::model::{CalculationInput, CatalogEntry, PlanCatalog};
use crate::utils::error::{CalcError, Result};
use crate::utils::money::MoneyFormat;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, LazyLock};

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://canrevolution.com/.netlify/functions/form-submission";

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is valid"));

/// File layout. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default)]
    money: MoneyFormat,
    plans: Option<Vec<CatalogEntry>>,
    #[serde(default)]
    contact: ContactConfig,
    #[serde(default)]
    session: SessionDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// What a fresh calculator form shows before the user touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefaults {
    #[serde(default = "default_plan")]
    pub plan: Option<String>,
    #[serde(default = "default_markup")]
    pub markup: String,
    #[serde(default = "default_volume")]
    pub volume: String,
}

fn default_plan() -> Option<String> {
    Some("medium".to_string())
}

fn default_markup() -> String {
    "0.85".to_string()
}

fn default_volume() -> String {
    "1500".to_string()
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            plan: default_plan(),
            markup: default_markup(),
            volume: default_volume(),
        }
    }
}

impl SessionDefaults {
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput::new(self.plan.as_deref(), &self.markup, &self.volume)
    }
}

/// Loaded application settings. The catalog is validated and frozen here.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub money: MoneyFormat,
    pub catalog: Arc<PlanCatalog>,
    pub contact: ContactConfig,
    pub session: SessionDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            money: MoneyFormat::default(),
            catalog: Arc::new(PlanCatalog::builtin()),
            contact: ContactConfig::default(),
            session: SessionDefaults::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        let raw: RawConfig = toml::from_str(&processed).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })?;

        let catalog = match raw.plans {
            Some(entries) => PlanCatalog::new(entries)?,
            None => PlanCatalog::builtin(),
        };

        Ok(Self {
            money: raw.money,
            catalog: Arc::new(catalog),
            contact: raw.contact,
            session: raw.session,
        })
    }

    /// Replaces `${NAME}` with the environment variable; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for AppConfig {
    fn catalog(&self) -> Arc<PlanCatalog> {
        Arc::clone(&self.catalog)
    }

    fn money_format(&self) -> &MoneyFormat {
        &self.money
    }

    fn contact_endpoint(&self) -> &str {
        &self.contact.endpoint
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("money.symbol", &self.money.symbol)?;
        validate_non_empty_string("money.decimal_separator", &self.money.decimal_separator)?;
        validate_url("contact.endpoint", &self.contact.endpoint)?;

        if let Some(plan) = self.session.plan.as_deref() {
            if self.catalog.get(plan).is_none() {
                return Err(CalcError::InvalidConfigValueError {
                    field: "session.plan".to_string(),
                    value: plan.to_string(),
                    reason: "Plan is not in the catalog".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.money.symbol, "€");
        assert_eq!(config.contact_endpoint(), DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.session.plan.as_deref(), Some("medium"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_plans_keeps_order() {
        let toml_content = r#"
[money]
symbol = "$"

[[plans]]
id = "pro"
name = "Pro Plan"
included_volume = 2000
base_fee = 1200.0
overage_rate = 0.4

[[plans]]
id = "basic"
included_volume = 300
base_fee = 250.0
overage_rate = 0.9

[session]
plan = "basic"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        let ids: Vec<&str> = config.catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["pro", "basic"]);
        assert_eq!(config.catalog.get("pro").unwrap().display_name(), "Pro Plan");
        assert_eq!(config.money.symbol, "$");
        assert_eq!(config.money.group_separator, ",");
        assert_eq!(config.session.markup, "0.85");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CANREV_TEST_ENDPOINT", "https://forms.example.com/submit");

        let config = AppConfig::from_toml_str(
            r#"
[contact]
endpoint = "${CANREV_TEST_ENDPOINT}"
"#,
        )
        .unwrap();
        assert_eq!(config.contact.endpoint, "https://forms.example.com/submit");

        std::env::remove_var("CANREV_TEST_ENDPOINT");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_plan = r#"
[[plans]]
id = "broken"
included_volume = 0
base_fee = 10.0
overage_rate = 0.1
"#;
        assert!(AppConfig::from_toml_str(bad_plan).is_err());

        let unknown_session_plan = AppConfig::from_toml_str("[session]\nplan = \"xl\"\n").unwrap();
        assert!(unknown_session_plan.validate().is_err());

        let bad_endpoint = AppConfig::from_toml_str("[contact]\nendpoint = \"not a url\"\n").unwrap();
        assert!(bad_endpoint.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[session]\nplan = \"large\"\nvolume = \"4000\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.session.to_input(), CalculationInput::new(Some("large"), "0.85", "4000"));
    }
}
