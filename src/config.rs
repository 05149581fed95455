//! Datamuse endpoint configuration.
//!
//! Values are layered: defaults, then an optional TOML file, then environment
//! variables, then whatever the caller sets explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::words::Relation;

pub const DEFAULT_BASE_URL: &str = "https://api.datamuse.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Overrides [`DatamuseConfig::base_url`].
pub const ENV_API_URL: &str = "RHYMEBUCKET_API_URL";
/// Overrides [`DatamuseConfig::max_results`].
pub const ENV_MAX_RESULTS: &str = "RHYMEBUCKET_MAX_RESULTS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatamuseConfig {
    /// Root of the API; `/words` is appended to its path.
    pub base_url: String,
    /// Upper bound on returned words, sent as `max`. `None` uses the API default.
    pub max_results: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for DatamuseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DatamuseConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Config(format!("invalid config: {e}")))
    }

    /// Reads a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Applies [`ENV_API_URL`] and [`ENV_MAX_RESULTS`] from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides looked up through `lookup`, keyed by environment
    /// variable name.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(ENV_MAX_RESULTS) {
            let max = raw.trim().parse::<u32>().map_err(|e| {
                Error::Config(format!("{ENV_MAX_RESULTS} must be a whole number, got {raw:?}: {e}"))
            })?;
            self.max_results = Some(max);
        }
        Ok(self)
    }

    /// Builds the `/words` query URL for `word`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhymebucket::{DatamuseConfig, Relation};
    ///
    /// let url = DatamuseConfig::default()
    ///     .query_url(Relation::Rhyme, "forgetful")
    ///     .unwrap();
    /// assert_eq!(url.as_str(), "https://api.datamuse.com/words?rel_rhy=forgetful");
    /// ```
    pub fn query_url(&self, relation: Relation, word: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base url {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push("words");

        {
            let mut query = url.query_pairs_mut();
            query.append_pair(relation.query_param(), word);
            if let Some(max) = self.max_results {
                query.append_pair("max", &max.to_string());
            }
        }

        Ok(url)
    }
}
