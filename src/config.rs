use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data;
use crate::error::Result;
use crate::lexicon::Blocklist;

/// Overrides for the built-in filter tags and word lists, read from TOML.
///
/// Every key is optional; missing keys keep the defaults from [`crate::data`].
///
/// ```toml
/// skip_tags = ["PNCT", "PREP", "PRCL", "LATN"]
/// indeclinable_nouns = ["кофе", "метро", "пальто"]
/// blocked_words = ["водка", "пиво"]
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub skip_tags: Option<Vec<String>>,
    pub indeclinable_nouns: Option<Vec<String>>,
    pub second_conjugation_exceptions: Option<Vec<String>>,
    pub second_conjugation_endings: Option<Vec<String>>,
    pub blocked_words: Option<Vec<String>>,
    pub blocked_fragments: Option<Vec<String>>,
}

impl RulesConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading rules from {}", path.display());
        let data = read_to_string(path)?;
        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn skip_tags(&self) -> HashSet<String> {
        self.skip_tags
            .clone()
            .unwrap_or_else(|| data::to_owned_list(data::SKIP_TAGS))
            .into_iter()
            .collect()
    }

    pub fn blocklist(&self) -> Blocklist {
        Blocklist::new(
            self.blocked_words
                .clone()
                .unwrap_or_else(|| data::to_owned_list(data::BLOCKED_WORDS)),
            self.blocked_fragments
                .clone()
                .unwrap_or_else(|| data::to_owned_list(data::BLOCKED_FRAGMENTS)),
        )
    }
}
