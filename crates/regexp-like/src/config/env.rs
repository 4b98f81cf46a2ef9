//! Environment-based configuration.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{LikeError, Result};

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "REGEXP_LIKE";

/// Environment variable reader.
///
/// Values set through [`EnvConfig::set`] shadow the process environment
/// for this reader only, which keeps tests from touching global state.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Local overrides, keyed by full variable name.
    overrides: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value, ignoring empty values.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        self.overrides
            .get(&var_name)
            .cloned()
            .or_else(|| std::env::var(&var_name).ok())
            .filter(|value| !value.trim().is_empty())
    }

    /// Get a parsed value.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty, and a
    /// configuration error when it is set but does not parse.
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };

        raw.trim().parse().map(Some).map_err(|e| {
            LikeError::config(format!(
                "invalid value {raw:?} for {}: {e}",
                self.var_name(name)
            ))
        })
    }

    /// Override a value for this reader.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let var_name = self.var_name(name);
        self.overrides.insert(var_name, value.into());
    }
}

/// Recognized environment variables (without prefix).
pub mod vars {
    /// Maximum number of cache entries.
    pub const CACHE_MAX: &str = "CACHE_MAX";
}
