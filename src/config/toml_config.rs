use crate::core::seat_ledger::{CapacityPolicy, DEFAULT_CAPACITY, DEFAULT_WAITLIST_SERIES};
use crate::core::SeriesPolicy;
use crate::utils::error::{ProgramError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

fn default_waitlist_series() -> String {
    DEFAULT_WAITLIST_SERIES.to_string()
}

fn default_series() -> BTreeMap<String, SeriesConfig> {
    BTreeMap::from([
        (
            "Concerto".to_string(),
            SeriesConfig {
                policy: SeriesPolicy::SingleSlot,
                capacity: None,
            },
        ),
        (
            "Eastside".to_string(),
            SeriesConfig {
                policy: SeriesPolicy::Limited,
                capacity: None,
            },
        ),
    ])
}

/// Capacity and series rules, usually read from `program.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default = "default_capacity")]
    pub default_capacity: u32,
    #[serde(default = "default_waitlist_series")]
    pub waitlist_series: String,
    #[serde(default = "default_series")]
    pub series: BTreeMap<String, SeriesConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    #[serde(default)]
    pub policy: SeriesPolicy,
    pub capacity: Option<u32>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            default_capacity: default_capacity(),
            waitlist_series: default_waitlist_series(),
            series: default_series(),
        }
    }
}

impl ProgramConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProgramError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProgramError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProgramError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("default_capacity", self.default_capacity, 1)?;
        validate_non_empty_string("waitlist_series", &self.waitlist_series)?;

        if self.series.contains_key(&self.waitlist_series) {
            return Err(ProgramError::InvalidConfigValueError {
                field: "waitlist_series".to_string(),
                value: self.waitlist_series.clone(),
                reason: "Waitlist name collides with a configured series".to_string(),
            });
        }

        for (name, series) in &self.series {
            validate_non_empty_string("series", name)?;
            if let Some(capacity) = series.capacity {
                let field = format!("series.{}.capacity", name);
                if series.policy != SeriesPolicy::Limited {
                    return Err(ProgramError::InvalidConfigValueError {
                        field,
                        value: capacity.to_string(),
                        reason: "Only limited series take a capacity".to_string(),
                    });
                }
                validate_positive_number(&field, capacity, 1)?;
            }
        }

        Ok(())
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.series.iter().fold(
            CapacityPolicy::new(self.default_capacity)
                .with_waitlist_series(self.waitlist_series.clone()),
            |policy, (name, series)| match series.capacity {
                Some(capacity) => policy.with_series_capacity(name.clone(), capacity),
                None => policy.with_series(name.clone(), series.policy),
            },
        )
    }
}

impl Validate for ProgramConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
