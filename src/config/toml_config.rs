use crate::core::{ConfigProvider, MenuItem};
use crate::utils::error::{RestaurantError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub restaurant: RestaurantSection,
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSection {
    pub name: String,
    pub location: String,
    pub opening_time: String,
    pub closing_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RestaurantError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn restaurant_name(&self) -> &str {
        &self.restaurant.name
    }

    fn location(&self) -> &str {
        &self.restaurant.location
    }

    fn opening_time(&self) -> Result<NaiveTime> {
        validation::validate_time_of_day("restaurant.opening_time", &self.restaurant.opening_time)
    }

    fn closing_time(&self) -> Result<NaiveTime> {
        validation::validate_time_of_day("restaurant.closing_time", &self.restaurant.closing_time)
    }

    fn menu_items(&self) -> Vec<MenuItem> {
        self.menu
            .iter()
            .map(|item| MenuItem::new(item.name.clone(), item.price))
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("restaurant.name", &self.restaurant.name)?;
        validation::validate_non_empty_string("restaurant.location", &self.restaurant.location)?;

        let opening_time = self.opening_time()?;
        let closing_time = self.closing_time()?;
        validation::validate_operating_hours("restaurant", opening_time, closing_time)?;

        for item in &self.menu {
            validation::validate_non_empty_string("menu.name", &item.name)?;
        }
        validation::validate_unique_names("menu.name", self.menu.iter().map(|i| i.name.as_str()))?;

        Ok(())
    }
}
