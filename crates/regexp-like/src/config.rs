//! Configuration types for regexp-like.
//!
//! The only tunable is the cache bound. It can be set in code, read from a
//! TOML document, or taken from the `REGEXP_LIKE_CACHE_MAX` environment
//! variable.

pub mod env;

use serde::Deserialize;

use crate::error::{LikeError, Result};

pub use env::EnvConfig;

/// Configuration for a [`LikeCache`](crate::cache::LikeCache).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Upper bound on live entries; `None` means unbounded.
    ///
    /// When the live count reaches this bound, the next miss triggers an
    /// eviction sweep.
    #[serde(alias = "cache_max")]
    pub max_entries: Option<usize>,
}

impl CacheConfig {
    /// Create an unbounded cache configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_entries: None }
    }

    /// Create a configuration bounded to `max` entries.
    #[must_use]
    pub const fn bounded(max: usize) -> Self {
        Self {
            max_entries: Some(max),
        }
    }

    /// Set the maximum number of entries.
    #[must_use]
    pub const fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Remove the entry bound.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_entries = None;
        self
    }

    /// Parse a configuration from a TOML document.
    ///
    /// Accepts `max_entries` (or `cache_max`) either at the top level or
    /// inside a `[cache]` table.
    ///
    /// # Example
    ///
    /// ```
    /// use regexp_like::config::CacheConfig;
    ///
    /// let config = CacheConfig::from_toml_str("[cache]\nmax_entries = 50")?;
    /// assert_eq!(config.max_entries, Some(50));
    /// # Ok::<(), regexp_like::LikeError>(())
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Document {
            cache: CacheConfig,
        }

        let table: toml::Table =
            toml::from_str(content).map_err(|e| LikeError::config(e.to_string()))?;

        let parsed = if table.contains_key("cache") {
            toml::from_str::<Document>(content).map(|doc| doc.cache)
        } else {
            toml::from_str::<Self>(content)
        };
        parsed.map_err(|e| LikeError::config(e.to_string()))
    }

    /// Read the configuration from the environment.
    ///
    /// An unset or empty `REGEXP_LIKE_CACHE_MAX` leaves the cache unbounded.
    pub fn from_env() -> Result<Self> {
        Self::from_env_config(&EnvConfig::default())
    }

    /// Read the configuration through a specific [`EnvConfig`].
    pub fn from_env_config(source: &EnvConfig) -> Result<Self> {
        Ok(Self {
            max_entries: source.parse(env::vars::CACHE_MAX)?,
        })
    }
}
