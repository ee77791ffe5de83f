//! Query configuration
//!
//! Multi-valued attributes are split into tokens before matching. Which
//! character separates the tokens depends on the attribute: `class` is a
//! space-separated list, `style` a `;`-separated declaration list.
//!
//! ```json
//! {
//!   "delimiters": {
//!     "default": " ",
//!     "by_key": { "style": ";", "rel": " " }
//!   }
//! }
//! ```

use crate::error::{DomError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Token separator used for every key without an explicit entry
pub const DEFAULT_DELIMITER: char = ' ';

/// Keys split on something other than [`DEFAULT_DELIMITER`] out of the box
pub const STANDARD_DELIMITERS: &[(&str, char)] = &[("style", ';')];

/// Mapping from attribute key to token delimiter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDelimiterPolicy", into = "RawDelimiterPolicy")]
pub struct DelimiterPolicy {
    default: char,
    by_key: AHashMap<String, char>,
}

impl DelimiterPolicy {
    /// Policy with no per-key overrides
    pub fn uniform(default: char) -> Self {
        Self {
            default,
            by_key: AHashMap::new(),
        }
    }

    /// Register (or replace) the delimiter for one key
    pub fn with_delimiter(mut self, key: impl Into<String>, delimiter: char) -> Self {
        self.by_key.insert(key.into(), delimiter);
        self
    }

    pub fn delimiter_for(&self, key: &str) -> char {
        self.by_key.get(key).copied().unwrap_or(self.default)
    }

    pub fn default_delimiter(&self) -> char {
        self.default
    }
}

impl Default for DelimiterPolicy {
    fn default() -> Self {
        STANDARD_DELIMITERS
            .iter()
            .fold(Self::uniform(DEFAULT_DELIMITER), |policy, &(key, delimiter)| {
                policy.with_delimiter(key, delimiter)
            })
    }
}

/// Wire shape of [`DelimiterPolicy`]; delimiters arrive as strings
#[derive(Debug, Serialize, Deserialize)]
struct RawDelimiterPolicy {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    by_key: AHashMap<String, String>,
}

impl TryFrom<RawDelimiterPolicy> for DelimiterPolicy {
    type Error = DomError;

    fn try_from(raw: RawDelimiterPolicy) -> Result<Self> {
        let default = match raw.default {
            Some(value) => single_char("default", value)?,
            None => DEFAULT_DELIMITER,
        };

        // Explicit entries extend the standard table rather than replace it
        let mut policy = Self {
            default,
            ..Self::default()
        };
        for (key, value) in raw.by_key {
            let delimiter = single_char(&key, value)?;
            policy.by_key.insert(key, delimiter);
        }
        Ok(policy)
    }
}

impl From<DelimiterPolicy> for RawDelimiterPolicy {
    fn from(policy: DelimiterPolicy) -> Self {
        Self {
            default: Some(policy.default.to_string()),
            by_key: policy
                .by_key
                .into_iter()
                .map(|(key, delimiter)| (key, delimiter.to_string()))
                .collect(),
        }
    }
}

fn single_char(key: &str, value: String) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DomError::InvalidDelimiter {
            key: key.to_string(),
            value,
        }),
    }
}

/// Configuration for [`crate::Query`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub delimiters: DelimiterPolicy,
}

impl QueryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            default = ?config.delimiters.default,
            overrides = config.delimiters.by_key.len(),
            "Loaded query config"
        );
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
